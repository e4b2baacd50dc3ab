//! # selector-shim
#![allow(clippy::uninlined_format_args)]
//!
//! Rewrites legacy jQuery-style `:contains()` selectors into the dialect
//! understood by modern browser automation engines.
//!
//! Step descriptions frequently target elements by text with `:contains()`,
//! which no browser engine implements. This crate turns those clauses into
//! `:has-text()` (when something precedes the clause) or a standalone
//! `text="..."` selector (when the clause stands alone), and leaves every other
//! selector untouched.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Rewrite one or more selectors
//! selector-shim transform 'div:contains("Abusive Bot")' ':contains("Just text")'
//!
//! # Plain output, one selector per line
//! selector-shim transform 'li:contains("Item 1")' --format simple
//!
//! # Read selectors from stdin
//! cat selectors.txt | selector-shim transform -
//!
//! # Rewrite a file of selectors and get a summary
//! selector-shim batch @selectors.txt
//!
//! # Fail instead of passing malformed selectors through
//! selector-shim transform 'div:contains("open' --strict
//!
//! # Check whether a selector needs rewriting
//! selector-shim check "span:contains('Hello World')"
//!
//! # Persist defaults
//! selector-shim config set format simple
//! selector-shim config show
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use selector_shim::{QuotePolicy, TransformOptions, Transformer};
//!
//! assert_eq!(
//!     selector_shim::transform("span:contains('Hello World')"),
//!     r#"span:has-text("Hello World")"#
//! );
//!
//! let transformer = Transformer::new(TransformOptions {
//!     quote_policy: QuotePolicy::Escape,
//! });
//! let result = transformer.try_transform(r#"li:contains("Item 1")"#).unwrap();
//! assert!(result.changed());
//! assert_eq!(result.output, r#"li:has-text("Item 1")"#);
//!
//! // Malformed clauses are left alone
//! assert_eq!(transformer.transform("div:contains(oops"), "div:contains(oops");
//! ```

/// Persistent CLI settings
pub mod config;

/// Legacy selector rewriting
pub mod selector;

/// Report and output types
pub mod types;

pub use config::{Config, ConfigManager};
pub use selector::{
    ClauseRewrite, QuotePolicy, QuoteStyle, RewriteForm, SelectorError, TransformOptions,
    Transformation, Transformer, contains_legacy_clause, transform,
};
pub use types::{BatchSummary, OutputFormat, TransformReport};
