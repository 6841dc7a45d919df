//! Role-scoped report rendering for `relato`.
//!
//! Turns an ordered list of items into a single rendered report string for
//! an acting user. Role policy decides which items appear and which carry
//! the priority flag, the total is computed over exactly the rendered rows,
//! and a [`ReportFormat`] renders header, rows, and footer in one output
//! syntax (delimited text or HTML).
//!
//! The pipeline is a pure function of its inputs: no I/O, no shared state,
//! no mutation of the caller's collections. Loading items/users and
//! persisting the finished string are the caller's business.
//!
//! # Example
//!
//! ```
//! use relato::{Item, Role, User, generate_report};
//!
//! let user = User::new("Maria", Role::Administrator);
//! let items = vec![
//!     Item::new("1", "A", 200.0),
//!     Item::new("2", "B", 1500.0),
//! ];
//!
//! let report = generate_report("CSV", &user, &items)?;
//! assert!(report.starts_with("ID,NOME,VALOR,USUARIO"));
//! # Ok::<(), relato::ReportError>(())
//! ```

pub mod error;
pub mod format;
pub mod model;
pub mod report;

pub use error::{ReportError, Result};
pub use format::ReportFormat;
pub use model::{Item, ProcessedItem, Role, User};
pub use report::{
    PRIORITY_THRESHOLD, STANDARD_VALUE_LIMIT, apply_role_policy, generate_report, total_value,
};
