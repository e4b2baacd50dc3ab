use anyhow::Result;
use serde_json::json;
use tracing::info;

use selector_shim::{OutputFormat, Transformer, contains_legacy_clause};

pub fn handle_check(selector: String, format: OutputFormat) -> Result<()> {
    info!("Checking selector: {}", selector);

    let legacy = contains_legacy_clause(&selector);
    let error = Transformer::default()
        .try_transform(&selector)
        .err()
        .map(|e| e.to_string());

    match format {
        OutputFormat::Json => {
            let output = json!({
                "selector": selector,
                "legacy": legacy,
                "valid": error.is_none(),
                "error": error,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Simple => {
            if let Some(error) = error {
                println!("✗ Malformed: {}", error);
            } else if legacy {
                println!("⚠️  Uses legacy :contains() syntax");
            } else {
                println!("✓ No rewrite needed");
            }
        }
    }
    Ok(())
}
