//! Core data types for `relato`.
//!
//! This module defines the types flowing through the report pipeline:
//! - `Item` - raw input record supplied by the caller
//! - `ProcessedItem` - item after role policy ran, possibly flagged
//! - `User` - the acting user a report is rendered for
//! - `Role` - role enumeration with an explicit open arm

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Acting user's role.
///
/// The recognized set is closed (`Administrator`, `Standard`); anything
/// else lands in `Other` with the value preserved. `Other` is a policy
/// outcome — it yields an empty report body — not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Standard,
    #[serde(untagged)]
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => "administrator",
            Self::Standard => "standard",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrator" => Ok(Self::Administrator),
            "standard" => Ok(Self::Standard),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

/// The user a report is rendered for.
///
/// The role is assumed already established and trustworthy by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// Raw input record.
///
/// Items are immutable inputs: processing copies fields into
/// [`ProcessedItem`] values and never mutates the caller's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identifier, rendered verbatim.
    pub id: String,
    /// Display text.
    pub name: String,
    /// Numeric magnitude role policy and the total operate on.
    pub value: f64,
}

impl Item {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
        }
    }
}

/// An [`Item`] after role policy ran.
///
/// `priority` is a presentation hint, never present on input: only an
/// administrator's view sets it, and only for items above the value
/// threshold. While unset it serializes as an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub id: String,
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub priority: bool,
}

impl ProcessedItem {
    /// Copy an input item into a processed row, optionally flagged.
    #[must_use]
    pub fn from_item(item: &Item, priority: bool) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            value: item.value,
            priority,
        }
    }
}
