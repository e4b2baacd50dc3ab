use anyhow::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

use selector_shim::{ConfigManager, OutputFormat, QuotePolicy, TransformReport, Transformer};

use crate::errors::ShimError;

/// Effective settings for one invocation: config file first, CLI flags on top
pub struct Settings {
    pub transformer: Transformer,
    pub format: OutputFormat,
    pub strict: bool,
}

/// Config manager for `--config <DIR>`, or the default location
pub fn config_manager(config_dir: Option<PathBuf>) -> Result<ConfigManager> {
    match config_dir {
        Some(dir) => Ok(ConfigManager::with_dir(dir)),
        None => ConfigManager::new().map_err(|e| ShimError::Config(format!("{:#}", e)).into()),
    }
}

pub fn resolve_settings(
    config_dir: Option<PathBuf>,
    format: Option<OutputFormat>,
    quote_policy: Option<QuotePolicy>,
    strict: bool,
) -> Result<Settings> {
    let config = config_manager(config_dir)?
        .load()
        .map_err(|e| ShimError::Config(format!("{:#}", e)))?;

    let mut options = config.transform_options();
    if let Some(quote_policy) = quote_policy {
        options.quote_policy = quote_policy;
    }

    Ok(Settings {
        transformer: Transformer::new(options),
        format: format.unwrap_or(config.format),
        strict: strict || config.strict,
    })
}

/// Split text into selectors, one per line.
/// Blank lines and lines starting with `//` are skipped.
pub fn parse_selector_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("//")
        })
        .map(str::to_string)
        .collect()
}

/// Expand `-` arguments into the selectors read from stdin
pub fn read_selectors(selectors: Vec<String>) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(selectors.len());
    for selector in selectors {
        if selector == "-" {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| ShimError::Input(format!("stdin: {}", e)))?;
            let lines = parse_selector_lines(&input);
            debug!("Read {} selectors from stdin", lines.len());
            expanded.extend(lines);
        } else {
            expanded.push(selector);
        }
    }
    Ok(expanded)
}

/// `@path` reads a file, anything else is taken as newline-separated selectors
pub fn read_batch_source(source: &str) -> Result<Vec<String>> {
    let text = if let Some(file_path) = source.strip_prefix('@') {
        fs::read_to_string(file_path)
            .map_err(|e| ShimError::Input(format!("{}: {}", file_path, e)))?
    } else {
        source.to_string()
    };
    Ok(parse_selector_lines(&text))
}

/// Transform every selector; in strict mode the first malformed one aborts the run
pub fn report_all(settings: &Settings, selectors: &[String]) -> Result<Vec<TransformReport>> {
    let mut reports = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match settings.transformer.try_transform(selector) {
            Err(err) if settings.strict => {
                return Err(ShimError::MalformedSelector {
                    selector: selector.clone(),
                    reason: err.to_string(),
                }
                .into());
            }
            Err(err) => {
                warn!("Passing selector through unchanged ({}): {}", err, selector);
                reports.push(TransformReport::new(selector, Err(err)));
            }
            result => reports.push(TransformReport::new(selector, result)),
        }
    }
    Ok(reports)
}
