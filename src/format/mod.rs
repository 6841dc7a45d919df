//! Output formatting for `relato`.
//!
//! A report is rendered in three phases — header, one row per processed
//! item, footer — by one of a closed set of output syntaxes.
//!
//! [`ReportFormat`] is the strategy point: a two-variant enum dispatching
//! to one backend module per syntax, so adding a variant without wiring
//! all three phases is a compile error. Every operation has the same
//! signature across variants; a backend that has no use for an argument
//! simply does not receive it from the dispatch arm.

mod csv;
mod html;

use crate::error::{ReportError, Result};
use crate::model::{ProcessedItem, User};
use std::fmt;

/// Output syntax for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Delimited-text output (legacy CSV layout).
    Csv,
    /// Markup output (self-contained HTML document).
    Html,
}

impl ReportFormat {
    /// Resolve a format token.
    ///
    /// Tokens are matched exactly and case-sensitively: `"CSV"` and
    /// `"HTML"` are the recognized set.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnsupportedFormat`] carrying the offending
    /// token for anything else.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "CSV" => Ok(Self::Csv),
            "HTML" => Ok(Self::Html),
            other => Err(ReportError::UnsupportedFormat {
                token: other.to_string(),
            }),
        }
    }

    /// Canonical token for this format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Html => "HTML",
        }
    }

    /// Opening fragment of a report.
    #[must_use]
    pub fn header(self, user: &User) -> String {
        match self {
            Self::Csv => csv::header(),
            Self::Html => html::header(user),
        }
    }

    /// One rendered row for a processed item.
    #[must_use]
    pub fn row(self, item: &ProcessedItem, user: &User) -> String {
        match self {
            Self::Csv => csv::row(item, user),
            Self::Html => html::row(item),
        }
    }

    /// Closing fragment, carrying the aggregate total.
    #[must_use]
    pub fn footer(self, total: f64) -> String {
        match self {
            Self::Csv => csv::footer(total),
            Self::Html => html::footer(total),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
