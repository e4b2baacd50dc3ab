//! Rewriting of legacy `:contains()` pseudo-selectors
//!
//! Step descriptions are often written with jQuery-style selectors such as
//! `div:contains("Abusive Bot")`. The automation engine does not understand
//! `:contains()`, so every such clause is rewritten into its native dialect:
//!
//! - `div:contains("Abusive Bot")` becomes `div:has-text("Abusive Bot")`
//! - `:contains("Just text")` becomes `text="Just text"`
//!
//! Anything without a legacy clause is returned unchanged.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

const LEGACY_TOKEN: &str = ":contains(";

/// Reasons a `:contains(` clause could not be parsed.
///
/// Offsets are byte positions in the original selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unterminated quote starting at offset {offset}")]
    UnterminatedQuote { offset: usize },

    #[error("expected a quoted argument for :contains() at offset {offset}")]
    UnquotedArgument { offset: usize },

    #[error("missing closing parenthesis for :contains() at offset {offset}")]
    MissingCloseParen { offset: usize },
}

/// How double quotes inside the text literal are emitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QuotePolicy {
    /// Backslash-escape bare double quotes so the output literal stays well formed
    #[default]
    Escape,
    /// Copy the literal content unchanged.
    ///
    /// The output is not guaranteed to be stable under a second rewrite: a
    /// literal holding `":contains("` ends up outside any quotes.
    Verbatim,
}

impl QuotePolicy {
    fn render(self, text: &str) -> Cow<'_, str> {
        match self {
            QuotePolicy::Escape if text.contains('"') => Cow::Owned(escape_double_quotes(text)),
            _ => Cow::Borrowed(text),
        }
    }
}

/// Quote character used by the original argument
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Double,
    Single,
}

/// Which target-dialect shape a clause was rewritten into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteForm {
    /// `<prefix>:has-text("...")`
    Prefixed,
    /// `text="..."`
    Bare,
}

/// A single rewritten `:contains()` clause
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClauseRewrite {
    /// Output shape chosen for this clause
    pub form: RewriteForm,
    /// Output emitted before this clause (empty for the bare form)
    pub prefix: String,
    /// Literal argument, without its quotes
    pub text: String,
    /// Quote style of the original argument
    pub quote: QuoteStyle,
}

/// Result of a successful rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub output: String,
    pub clauses: Vec<ClauseRewrite>,
}

impl Transformation {
    /// Whether any clause was rewritten
    pub fn changed(&self) -> bool {
        !self.clauses.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub quote_policy: QuotePolicy,
}

/// Legacy selector rewriter.
///
/// Stateless apart from its options, so a single instance can be shared freely
/// between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transformer {
    options: TransformOptions,
}

struct LegacyClause<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    quote: QuoteStyle,
}

impl Transformer {
    pub fn new(options: TransformOptions) -> Self {
        Transformer { options }
    }

    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Rewrite `selector`, returning it unchanged if it cannot be parsed.
    pub fn transform(&self, selector: &str) -> String {
        match self.try_transform(selector) {
            Ok(transformation) => transformation.output,
            Err(err) => {
                debug!("Leaving selector unchanged ({}): {}", err, selector);
                selector.to_string()
            }
        }
    }

    /// Rewrite every `:contains()` clause in `selector`.
    ///
    /// Clauses are only recognised outside quoted strings, and a backslash
    /// escapes the following character both inside and outside quotes.
    /// Outside a clause, a quote with no closing match is an ordinary
    /// character, except that a clause may not follow an unmatched `"`.
    pub fn try_transform(&self, selector: &str) -> Result<Transformation, SelectorError> {
        let bytes = selector.as_bytes();
        let mut output = String::with_capacity(selector.len() + 8);
        let mut clauses = Vec::new();
        let mut copied = 0;
        let mut pos = 0;
        let mut stray_double_quote = None;

        while pos < bytes.len() {
            match bytes[pos] {
                b'\\' => pos += 2,
                quote @ (b'"' | b'\'') => match closing_quote(bytes, pos + 1, quote) {
                    Some(close) => pos = close + 1,
                    None => {
                        if quote == b'"' && stray_double_quote.is_none() {
                            stray_double_quote = Some(pos);
                        }
                        pos += 1;
                    }
                },
                b':' if bytes[pos..].starts_with(LEGACY_TOKEN.as_bytes()) => {
                    // A rewrite emits double quotes, which would pair with an
                    // earlier unmatched one on the next pass.
                    if let Some(offset) = stray_double_quote {
                        return Err(SelectorError::UnterminatedQuote { offset });
                    }
                    let clause = parse_clause(selector, pos)?;
                    output.push_str(&selector[copied..clause.start]);
                    clauses.push(self.rewrite(&mut output, &clause));
                    pos = clause.end;
                    copied = pos;
                }
                _ => pos += 1,
            }
        }

        if clauses.is_empty() {
            return Ok(Transformation {
                output: selector.to_string(),
                clauses,
            });
        }

        output.push_str(&selector[copied..]);
        Ok(Transformation { output, clauses })
    }

    fn rewrite(&self, output: &mut String, clause: &LegacyClause<'_>) -> ClauseRewrite {
        let prefix = output.clone();
        let literal = self.options.quote_policy.render(clause.text);

        let form = if prefix.is_empty() {
            output.push_str("text=\"");
            output.push_str(&literal);
            output.push('"');
            RewriteForm::Bare
        } else {
            output.push_str(":has-text(\"");
            output.push_str(&literal);
            output.push_str("\")");
            RewriteForm::Prefixed
        };

        ClauseRewrite {
            form,
            prefix,
            text: clause.text.to_string(),
            quote: clause.quote,
        }
    }
}

/// Rewrite `selector` with the default options.
///
/// ```
/// assert_eq!(
///     selector_shim::transform(r#"div:contains("Abusive Bot")"#),
///     r#"div:has-text("Abusive Bot")"#
/// );
/// assert_eq!(
///     selector_shim::transform(r#":contains("Just text")"#),
///     r#"text="Just text""#
/// );
/// assert_eq!(selector_shim::transform("button.primary"), "button.primary");
/// ```
pub fn transform(selector: &str) -> String {
    Transformer::default().transform(selector)
}

/// Whether `selector` has a `:contains(` token outside any quoted string.
pub fn contains_legacy_clause(selector: &str) -> bool {
    let bytes = selector.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            quote @ (b'"' | b'\'') => match closing_quote(bytes, pos + 1, quote) {
                Some(close) => pos = close + 1,
                None => pos += 1,
            },
            b':' if bytes[pos..].starts_with(LEGACY_TOKEN.as_bytes()) => return true,
            _ => pos += 1,
        }
    }
    false
}

fn parse_clause(selector: &str, start: usize) -> Result<LegacyClause<'_>, SelectorError> {
    let bytes = selector.as_bytes();
    let open = skip_whitespace(bytes, start + LEGACY_TOKEN.len());

    let quote = match bytes.get(open) {
        Some(&q) if q == b'"' || q == b'\'' => q,
        _ => return Err(SelectorError::UnquotedArgument { offset: open }),
    };
    let close = closing_quote(bytes, open + 1, quote)
        .ok_or(SelectorError::UnterminatedQuote { offset: open })?;

    let paren = skip_whitespace(bytes, close + 1);
    if bytes.get(paren) != Some(&b')') {
        return Err(SelectorError::MissingCloseParen { offset: paren });
    }

    Ok(LegacyClause {
        start,
        end: paren + 1,
        text: &selector[open + 1..close],
        quote: if quote == b'"' {
            QuoteStyle::Double
        } else {
            QuoteStyle::Single
        },
    })
}

/// Position of the quote closing a string whose content starts at `from`
fn closing_quote(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => return Some(pos),
            _ => pos += 1,
        }
    }
    None
}

fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}

// Escape sequences already present are copied as-is.
fn escape_double_quotes(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 4);
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
