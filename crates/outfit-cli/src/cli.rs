use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

/// Log level options for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Registration and stylesheet loading
    Debug,
    /// Every resolved axis and dropped token
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain class strings, one per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "outfit")]
#[command(about = "Resolve widget variants into utility class lists")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load widget kinds from a YAML stylesheet instead of the built-in catalog
    #[arg(long, global = true, env = "OUTFIT_STYLESHEET", value_name = "PATH")]
    pub stylesheet: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Level requested on the command line, if any.
    ///
    /// `--log-level` wins over `--verbose`. `None` leaves the choice to
    /// `RUST_LOG`.
    pub fn log_filter(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered widget kinds and their axes
    Kinds,

    /// Resolve a widget's options and print its classes
    Resolve {
        /// Widget kind, e.g. button or card
        kind: String,

        /// Select a value for an axis
        #[arg(short, long = "set", value_name = "AXIS=VALUE", value_parser = parse_selection)]
        selections: Vec<(String, String)>,

        /// Mark a non-axis input as supplied (e.g. image)
        #[arg(short, long = "input", value_name = "NAME")]
        inputs: Vec<String>,

        /// Caller classes, applied last
        #[arg(short, long = "class", value_name = "TOKENS")]
        classes: Vec<String>,
    },

    /// Merge class lists, later classes overriding earlier ones
    Merge {
        /// Class lists in increasing precedence
        #[arg(required = true, value_name = "TOKENS")]
        sources: Vec<String>,
    },
}

/// Parses `axis=value`.
pub fn parse_selection(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((axis, value)) if !axis.trim().is_empty() && !value.trim().is_empty() => {
            Ok((axis.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected AXIS=VALUE, got '{}'", raw)),
    }
}
