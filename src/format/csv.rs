//! Delimited-text backend.
//!
//! Reproduces the legacy CSV report layout exactly: fixed column labels,
//! fields interpolated verbatim, and a three-field footer narrower than
//! the four-column header. Known limitation: embedded commas in field
//! values are NOT escaped — this layout predates the pipeline and is
//! preserved as-is rather than silently corrected.

use crate::model::{ProcessedItem, User};

/// Fixed column-label line.
pub(super) fn header() -> String {
    "ID,NOME,VALOR,USUARIO\n".to_string()
}

/// One comma-joined row: id, name, value, acting user's name.
pub(super) fn row(item: &ProcessedItem, user: &User) -> String {
    format!("{},{},{},{}\n", item.id, item.name, item.value, user.name)
}

/// Blank line, literal `Total,,` line, then the total as the first of
/// three fields.
pub(super) fn footer(total: f64) -> String {
    format!("\nTotal,,\n{total},,")
}
