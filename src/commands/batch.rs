use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use selector_shim::{BatchSummary, OutputFormat, QuotePolicy};

use crate::commands::utils;

pub fn handle_batch(
    source: String,
    format: Option<OutputFormat>,
    quote_policy: Option<QuotePolicy>,
    strict: bool,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    info!("Executing batch transform");

    let settings = utils::resolve_settings(config_dir, format, quote_policy, strict)?;
    let selectors = utils::read_batch_source(&source)?;
    let reports = utils::report_all(&settings, &selectors)?;
    let summary = BatchSummary::from_reports(&reports);

    match settings.format {
        OutputFormat::Json => {
            let output = json!({
                "results": reports,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Simple => {
            for report in &reports {
                println!("{}", report.output);
            }
            // Summary goes to stderr so stdout can be piped
            eprintln!("\nBatch transform complete:");
            eprintln!("  ✓ {} selectors rewritten", summary.changed);
            eprintln!("  - {} selectors unchanged", summary.unchanged);
            if summary.malformed > 0 {
                eprintln!("  ✗ {} malformed selectors passed through", summary.malformed);
            }
        }
    }
    Ok(())
}
