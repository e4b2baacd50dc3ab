#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use selector_shim::{OutputFormat, QuotePolicy};

mod commands;
mod errors;

// Exit codes
const EXIT_SUCCESS: i32 = 0;

use crate::commands::config::ConfigCommands;

#[derive(Parser)]
#[command(name = "selector-shim")]
#[command(about = "Rewrite legacy :contains() selectors for modern automation engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding config.json (defaults to ~/.selector-shim)
    #[arg(long, global = true, env = "SELECTOR_SHIM_HOME")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite one or more selectors
    Transform {
        /// Selectors to rewrite ("-" reads one per line from stdin)
        #[arg(required = true)]
        selectors: Vec<String>,

        /// Output format (defaults to the configured format)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// How double quotes inside text literals are emitted
        #[arg(long)]
        quote_policy: Option<QuotePolicy>,

        /// Fail on malformed selectors instead of passing them through
        #[arg(long)]
        strict: bool,
    },

    /// Rewrite a list of selectors and summarize the result
    Batch {
        /// Newline-separated selectors, or @file to read them from a file
        source: String,

        /// Output format (defaults to the configured format)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// How double quotes inside text literals are emitted
        #[arg(long)]
        quote_policy: Option<QuotePolicy>,

        /// Fail on the first malformed selector
        #[arg(long)]
        strict: bool,
    },

    /// Report whether a selector uses legacy syntax and whether it parses
    Check {
        /// Selector to check
        selector: String,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Manage persistent settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

fn main() {
    let result = run();

    // Handle exit codes based on error type
    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            // Convert to our error type to get proper exit code
            let shim_err: errors::ShimError = err.into();

            // Output JSON error to stdout for programmatic consumption
            let error_json = json!({
                "error": true,
                "message": shim_err.to_string(),
                "exit_code": shim_err.exit_code()
            });
            println!(
                "{}",
                serde_json::to_string(&error_json).unwrap_or_else(|_| "{}".to_string())
            );

            // Also log to stderr for human reading
            eprintln!("Error: {}", shim_err);
            std::process::exit(shim_err.exit_code());
        }
    }
}

fn run() -> Result<()> {
    // Initialize tracing to stderr (so JSON output to stdout remains clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "selector_shim=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // Output logs to stderr
                .with_target(false), // Don't show target module in logs
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform {
            selectors,
            format,
            quote_policy,
            strict,
        } => commands::transform::handle_transform(
            selectors,
            format,
            quote_policy,
            strict,
            cli.config,
        )?,

        Commands::Batch {
            source,
            format,
            quote_policy,
            strict,
        } => commands::batch::handle_batch(source, format, quote_policy, strict, cli.config)?,

        Commands::Check { selector, format } => commands::check::handle_check(selector, format)?,

        Commands::Config { command } => commands::config::handle_config(command, cli.config)?,

        Commands::Version => commands::version::handle_version()?,
    }

    Ok(())
}
