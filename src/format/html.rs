//! Markup backend.
//!
//! Emits one self-contained HTML document per report, built with plain
//! `format!` pushes in deterministic order: same inputs, identical bytes.
//! Rows carry a bold-weight style attribute when the item was flagged as
//! priority — the flag is a business decision made upstream by role
//! policy; this backend only reads it.

use crate::model::{ProcessedItem, User};

/// Document and table opening, with the acting user's name in a
/// subheading and the column-label row.
pub(super) fn header(user: &User) -> String {
    format!(
        "<html>\n<body>\n<h1>Relatorio de Itens</h1>\n<h2>Usuario: {}</h2>\n\
         <table>\n<tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
        user.name
    )
}

/// One table row; priority items render bold.
pub(super) fn row(item: &ProcessedItem) -> String {
    let open = if item.priority {
        "<tr style=\"font-weight: bold\">"
    } else {
        "<tr>"
    };
    format!(
        "{open}<td>{}</td><td>{}</td><td>{}</td></tr>\n",
        item.id, item.name, item.value
    )
}

/// Table close, total line, document close.
pub(super) fn footer(total: f64) -> String {
    format!("</table>\n<p>Total: {total}</p>\n</body>\n</html>")
}
