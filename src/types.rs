use serde::{Deserialize, Serialize};

use crate::selector::{ClauseRewrite, SelectorError, Transformation};

/// Output format for CLI results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON format for programmatic consumption
    #[default]
    Json,
    /// Human-readable simple format
    Simple,
}

/// Outcome of transforming one selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    /// Selector as given
    pub input: String,
    /// Selector to hand to the automation engine
    pub output: String,
    /// Whether any clause was rewritten
    pub changed: bool,
    /// Rewritten clauses, in order of appearance
    pub clauses: Vec<ClauseRewrite>,
    /// Parse failure, if the selector was passed through because it is malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransformReport {
    pub fn new(input: &str, result: Result<Transformation, SelectorError>) -> Self {
        match result {
            Ok(transformation) => TransformReport {
                input: input.to_string(),
                changed: transformation.changed(),
                output: transformation.output,
                clauses: transformation.clauses,
                error: None,
            },
            Err(err) => TransformReport {
                input: input.to_string(),
                output: input.to_string(),
                changed: false,
                clauses: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.error.is_some()
    }
}

/// Totals for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub malformed: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[TransformReport]) -> Self {
        let mut summary = BatchSummary {
            total: reports.len(),
            ..Default::default()
        };
        for report in reports {
            if report.is_malformed() {
                summary.malformed += 1;
            } else if report.changed {
                summary.changed += 1;
            } else {
                summary.unchanged += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
