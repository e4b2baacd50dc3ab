// Unit tests for types module

use super::*;
use crate::selector::{RewriteForm, Transformer};

#[test]
fn test_output_format() {
    let json = OutputFormat::Json;
    let simple = OutputFormat::Simple;

    assert!(matches!(json, OutputFormat::Json));
    assert!(matches!(simple, OutputFormat::Simple));
    assert_eq!(OutputFormat::default(), OutputFormat::Json);
    assert_eq!(serde_json::to_string(&simple).unwrap(), "\"simple\"");
}

#[test]
fn test_report_for_rewritten_selector() {
    let input = r#"div:contains("Abusive Bot")"#;
    let report = TransformReport::new(input, Transformer::default().try_transform(input));

    assert_eq!(report.input, input);
    assert_eq!(report.output, r#"div:has-text("Abusive Bot")"#);
    assert!(report.changed);
    assert!(!report.is_malformed());
    assert_eq!(report.clauses.len(), 1);
    assert_eq!(report.clauses[0].form, RewriteForm::Prefixed);
    assert_eq!(report.clauses[0].prefix, "div");
}

#[test]
fn test_report_for_malformed_selector() {
    let input = "div:contains(oops)";
    let report = TransformReport::new(input, Transformer::default().try_transform(input));

    assert_eq!(report.output, input);
    assert!(!report.changed);
    assert!(report.is_malformed());
    assert!(report.clauses.is_empty());
    assert!(report.error.unwrap().contains("quoted argument"));
}

#[test]
fn test_report_serialization() {
    let input = "button.primary";
    let report = TransformReport::new(input, Transformer::default().try_transform(input));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["input"], "button.primary");
    assert_eq!(json["output"], "button.primary");
    assert_eq!(json["changed"], false);
    // Error is omitted when absent
    assert!(json.get("error").is_none());

    let input = ":contains('x')";
    let report = TransformReport::new(input, Transformer::default().try_transform(input));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["clauses"][0]["form"], "bare");
    assert_eq!(json["clauses"][0]["quote"], "single");
}

#[test]
fn test_batch_summary() {
    let transformer = Transformer::default();
    let reports: Vec<TransformReport> = [
        "button.primary",
        r#"li:contains("Item 1")"#,
        ":contains('Just text')",
        r#"div:contains("open"#,
    ]
    .iter()
    .map(|s| TransformReport::new(s, transformer.try_transform(s)))
    .collect();

    let summary = BatchSummary::from_reports(&reports);
    assert_eq!(
        summary,
        BatchSummary {
            total: 4,
            changed: 2,
            unchanged: 1,
            malformed: 1,
        }
    );
    assert_eq!(BatchSummary::from_reports(&[]), BatchSummary::default());
}
