//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BIND_ADDR, DEFAULT_PAGESPEED_ENDPOINT, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
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

/// Service configuration, parsed from the command line.
///
/// With `--url` the binary runs a single scan and prints the JSON report;
/// without it, the binary serves the scan API over HTTP on `--bind`.
#[derive(Debug, Clone, Parser)]
#[command(name = "seo_scanner", version, about)]
pub struct Config {
    /// Scan a single URL and print the JSON report instead of serving
    #[arg(long)]
    pub url: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// PageSpeed Insights API key (falls back to the PAGESPEED_API_KEY
    /// environment variable, which a .env file can provide)
    #[arg(long)]
    pub api_key: Option<String>,

    /// PageSpeed Insights endpoint base URL
    #[arg(long, default_value = DEFAULT_PAGESPEED_ENDPOINT)]
    pub pagespeed_endpoint: String,

    /// HTTP User-Agent header value for page fetches
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            bind: DEFAULT_BIND_ADDR.to_string(),
            api_key: None,
            pagespeed_endpoint: DEFAULT_PAGESPEED_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
