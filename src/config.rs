use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// Network operation timeouts
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 10;
/// Number of query attempts before a lookup is reported as failed
pub const DNS_ATTEMPTS: usize = 2;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Color mode for result and error lines written to stdout.
///
/// `Auto` colorizes only when stdout is a terminal; `Always` and `Never`
/// force the choice either way.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ColorChoice {
    /// Colorize when stdout is a terminal (default)
    Auto,
    /// Always colorize, even when piped
    Always,
    /// Never colorize
    Never,
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Resolve a single hostname or address
/// host_lookup example.com
/// host_lookup 8.8.8.8
///
/// # Resolve every entry in a file, one per line
/// host_lookup -l hosts.txt
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "host_lookup",
    about = "Resolves hostnames and IP addresses through forward or reverse DNS."
)]
pub struct Opt {
    /// Hostname or IP address to resolve (exactly one, unless --list is used)
    #[arg(value_parser)]
    pub targets: Vec<String>,

    /// File with one hostname or IP address per line.
    ///
    /// Lines starting with `#` or a leading space are skipped.
    #[arg(short = 'l', long = "list", value_parser)]
    pub list: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Color output: auto|always|never
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}
