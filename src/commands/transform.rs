use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use selector_shim::{OutputFormat, QuotePolicy};

use crate::commands::utils;

pub fn handle_transform(
    selectors: Vec<String>,
    format: Option<OutputFormat>,
    quote_policy: Option<QuotePolicy>,
    strict: bool,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    let settings = utils::resolve_settings(config_dir, format, quote_policy, strict)?;
    let selectors = utils::read_selectors(selectors)?;
    info!("Transforming {} selector(s)", selectors.len());

    let reports = utils::report_all(&settings, &selectors)?;

    match settings.format {
        OutputFormat::Json => {
            // A single selector gives a single object, several give an array
            if let [report] = reports.as_slice() {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        OutputFormat::Simple => {
            for report in &reports {
                println!("{}", report.output);
            }
        }
    }
    Ok(())
}
