//! Command-line interface definitions.
//!
//! Defines the CLI structure for the `work-estimator` binary using `clap`.

pub mod check;
pub mod defaults;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use work_estimator::config::{ConfigFormat, LogFormat, LoggingConfig};

/// Inspect and check seat-based work estimator configuration
#[derive(Parser, Debug)]
#[command(name = "work-estimator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// Log filter directive, overridden by RUST_LOG [default: warn]
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format [default: pretty]
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Resolve logging settings: flags over the checked file's `[logging]`
    /// section over defaults.
    ///
    /// An unreadable file falls back to defaults here; `check` reports it.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut logging = match &self.command {
            Commands::Check(args) => std::fs::read_to_string(&args.path)
                .ok()
                .and_then(|content| {
                    LoggingConfig::from_section(&content, ConfigFormat::from_path(&args.path))
                        .ok()
                        .flatten()
                })
                .unwrap_or_default(),
            Commands::Defaults(_) => LoggingConfig::default(),
        };

        if let Some(level) = &self.log_level {
            logging.level.clone_from(level);
        }
        if let Some(format) = self.log_format {
            logging.format = format.into();
        }
        logging
    }
}

/// Config file format for rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Toml => Self::Toml,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the built-in default configuration
    Defaults(DefaultsArgs),

    /// Load a configuration file and check seat bounds and divisors
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
pub struct DefaultsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Path to a TOML or JSON (by extension) config file
    pub path: PathBuf,
}
