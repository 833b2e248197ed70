//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_scanner` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Serving the scan API, or running a single scan with `--url`
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_scanner::initialization::init_logger_with;
use seo_scanner::{start_server, Config, Scanner};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists). This allows
    // setting PAGESPEED_API_KEY in .env without exporting it manually.
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let scanner = Scanner::new(&config).context("Failed to initialize scanner")?;

    match config.url {
        Some(ref url) => match scanner.scan(url).await {
            Ok(report) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize scan report")?
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("seo_scanner error: {e:#}");
                process::exit(1);
            }
        },
        None => start_server(&config.bind, scanner).await,
    }
}
