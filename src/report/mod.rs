//! Report generation pipeline.
//!
//! The coordinator: applies role policy to the input items, totals the
//! surviving rows, and delegates rendering to the selected
//! [`ReportFormat`]. It owns no formatting knowledge of its own — syntax
//! lives entirely in the format backends.

use crate::error::Result;
use crate::format::ReportFormat;
use crate::model::{Item, ProcessedItem, Role, User};
use tracing::{debug, trace};

/// Above this value an administrator's view flags an item as priority.
pub const PRIORITY_THRESHOLD: f64 = 1000.0;

/// Standard users only see items at or below this value.
pub const STANDARD_VALUE_LIMIT: f64 = 500.0;

/// Generate a rendered report for `user` over `items`.
///
/// The format token is resolved first: an unrecognized token aborts the
/// call before any item is touched, so there is never partial output.
/// Identical inputs render identical text, and the caller's slice is
/// never mutated. The returned text is trimmed of leading and trailing
/// whitespace.
///
/// # Errors
///
/// Returns [`crate::ReportError::UnsupportedFormat`] if the token matches
/// no recognized format.
pub fn generate_report(format_token: &str, user: &User, items: &[Item]) -> Result<String> {
    let format = ReportFormat::from_token(format_token)?;

    let processed = apply_role_policy(&user.role, items);
    let total = total_value(&processed);
    debug!(
        format = %format,
        role = %user.role,
        input = items.len(),
        retained = processed.len(),
        total,
        "Rendering report"
    );

    let mut out = format.header(user);
    for item in &processed {
        trace!(id = %item.id, priority = item.priority, "Rendering row");
        out.push_str(&format.row(item, user));
    }
    out.push_str(&format.footer(total));

    Ok(out.trim().to_string())
}

/// Apply role policy, producing the rows a report will show.
///
/// Administrators retain every item, with values above
/// [`PRIORITY_THRESHOLD`] flagged as priority. Standard users retain only
/// items at or below [`STANDARD_VALUE_LIMIT`], never flagged. Any other
/// role retains nothing — an explicit outcome, not an error. The filter
/// is stable: surviving items keep their input order.
#[must_use]
pub fn apply_role_policy(role: &Role, items: &[Item]) -> Vec<ProcessedItem> {
    match role {
        Role::Administrator => items
            .iter()
            .map(|item| ProcessedItem::from_item(item, item.value > PRIORITY_THRESHOLD))
            .collect(),
        Role::Standard => items
            .iter()
            .filter(|item| item.value <= STANDARD_VALUE_LIMIT)
            .map(|item| ProcessedItem::from_item(item, false))
            .collect(),
        Role::Other(_) => Vec::new(),
    }
}

/// Sum of `value` over exactly the given processed rows (0 if empty).
#[must_use]
pub fn total_value(items: &[ProcessedItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}
