//! Conformance tests: rendered report output.
//!
//! Pins the exact report text for the canonical scenarios: administrator
//! and standard CSV views, priority styling in HTML, and unknown-role /
//! unknown-token handling. These strings are the external contract of the
//! pipeline — any change here is a breaking change for consumers parsing
//! the legacy layout.

use relato::{Item, ReportError, Role, User, generate_report};

fn sample_items() -> Vec<Item> {
    vec![Item::new("1", "A", 200.0), Item::new("2", "B", 1500.0)]
}

#[test]
fn csv_admin_report_matches_legacy_layout() {
    let user = User::new("Maria", Role::Administrator);
    let report = generate_report("CSV", &user, &sample_items()).unwrap();
    assert_eq!(
        report,
        "ID,NOME,VALOR,USUARIO\n\
         1,A,200,Maria\n\
         2,B,1500,Maria\n\
         \n\
         Total,,\n\
         1700,,"
    );
}

#[test]
fn csv_standard_report_filters_high_value_items() {
    let user = User::new("Joao", Role::Standard);
    let report = generate_report("CSV", &user, &sample_items()).unwrap();
    assert_eq!(
        report,
        "ID,NOME,VALOR,USUARIO\n\
         1,A,200,Joao\n\
         \n\
         Total,,\n\
         200,,"
    );
}

#[test]
fn html_admin_report_bolds_priority_rows() {
    let user = User::new("Maria", Role::Administrator);
    let report = generate_report("HTML", &user, &sample_items()).unwrap();
    assert_eq!(
        report,
        "<html>\n\
         <body>\n\
         <h1>Relatorio de Itens</h1>\n\
         <h2>Usuario: Maria</h2>\n\
         <table>\n\
         <tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n\
         <tr><td>1</td><td>A</td><td>200</td></tr>\n\
         <tr style=\"font-weight: bold\"><td>2</td><td>B</td><td>1500</td></tr>\n\
         </table>\n\
         <p>Total: 1700</p>\n\
         </body>\n\
         </html>"
    );
}

#[test]
fn html_standard_report_never_bolds() {
    let user = User::new("Joao", Role::Standard);
    let report = generate_report("HTML", &user, &sample_items()).unwrap();
    assert!(!report.contains("font-weight"));
    assert!(report.contains("<tr><td>1</td><td>A</td><td>200</td></tr>"));
    assert!(!report.contains("<td>2</td>"));
    assert!(report.contains("<p>Total: 200</p>"));
}

#[test]
fn unknown_role_renders_empty_body_with_zero_total() {
    let user = User::new("Eve", Role::Other("auditor".to_string()));
    let report = generate_report("CSV", &user, &sample_items()).unwrap();
    assert_eq!(report, "ID,NOME,VALOR,USUARIO\n\nTotal,,\n0,,");
}

#[test]
fn empty_input_renders_zero_total() {
    let user = User::new("Maria", Role::Administrator);
    let report = generate_report("CSV", &user, &[]).unwrap();
    assert_eq!(report, "ID,NOME,VALOR,USUARIO\n\nTotal,,\n0,,");
}

#[test]
fn unknown_token_fails_with_the_offending_token() {
    let user = User::new("Maria", Role::Administrator);
    let err = generate_report("XML", &user, &sample_items()).unwrap_err();
    assert_eq!(
        err,
        ReportError::UnsupportedFormat {
            token: "XML".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Unsupported report type: XML");
}

#[test]
fn token_match_is_case_sensitive() {
    let user = User::new("Maria", Role::Administrator);
    let err = generate_report("csv", &user, &sample_items()).unwrap_err();
    assert_eq!(
        err,
        ReportError::UnsupportedFormat {
            token: "csv".to_string(),
        }
    );
}

#[test]
fn repeated_calls_render_identical_text() {
    let user = User::new("Maria", Role::Administrator);
    let items = sample_items();
    let first = generate_report("HTML", &user, &items).unwrap();
    let second = generate_report("HTML", &user, &items).unwrap();
    assert_eq!(first, second);
}

#[test]
fn input_collection_is_left_untouched() {
    let user = User::new("Maria", Role::Administrator);
    let items = sample_items();
    let before = items.clone();
    let _ = generate_report("CSV", &user, &items).unwrap();
    assert_eq!(items, before);
}
