//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used for
//! page fetches and analyzer calls.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, PAGESPEED_TIMEOUT_SECS, PAGE_FETCH_TIMEOUT_SECS};

/// Initializes the HTTP client used for page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - The page fetch timeout
/// - Redirect following enabled (reqwest's default policy)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_page_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(PAGE_FETCH_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for PageSpeed Insights calls.
///
/// Uses a much longer timeout than the page client: the analyzer runs a full
/// Lighthouse pass server-side before answering.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_analyzer_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(PAGESPEED_TIMEOUT_SECS))
        .build()?;
    Ok(Arc::new(client))
}
