//! seo_scanner library: website SEO scanning functionality
//!
//! This library scans a web page and produces a single SEO report by
//! combining two independent signal sources:
//! - a PageSpeed Insights analysis (category scores and named audits), and
//! - direct inspection of the page's raw markup (titles, meta tags, social
//!   metadata, structured data, headings, images, links, word count).
//!
//! The two result sets are merged into an ordered issue list and a composite
//! 0-100 score.
//!
//! # Example
//!
//! ```no_run
//! use seo_scanner::{Config, Scanner};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: Some("my-pagespeed-key".into()),
//!     ..Default::default()
//! };
//!
//! let scanner = Scanner::new(&config)?;
//! let report = scanner.scan("https://example.com").await?;
//! println!("Score: {} with {} findings", report.score, report.issues.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod analyze;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod pagespeed;
mod report;
mod scan;
mod server;
mod utils;

// Re-export public API
pub use analyze::{analyze_markup, MarkupSignals};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ScanError};
pub use pagespeed::{LighthouseResult, PageSpeedClient};
pub use report::{
    synthesize_issues, ContentReport, Issue, IssueType, PerformanceReport, ScanResult,
    TechnicalReport,
};
pub use scan::{normalize_target_url, Scanner};
pub use server::{router, start_server, ScanRequest};
