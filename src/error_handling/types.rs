//! Error type definitions.
//!
//! This module defines the error types used throughout the application,
//! split between initialization failures and per-scan failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that can abort a scan.
///
/// The first two variants are input errors: they are reported to the caller
/// before any network call is attempted. The analyzer variants are fatal
/// because no score can be produced without the external analyzer; a failed
/// page fetch is deliberately NOT represented here: it degrades to an empty
/// document inside the fetch module instead.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The request carried no URL.
    #[error("URL is required")]
    MissingUrl,

    /// The request URL could not be parsed as an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No PageSpeed Insights API key is configured.
    #[error("PageSpeed API key not configured")]
    MissingApiKey,

    /// The analyzer request failed at the transport level.
    #[error("PageSpeed request failed: {0}")]
    AnalyzerRequest(#[source] ReqwestError),

    /// The analyzer answered with a non-success status.
    #[error("PageSpeed returned HTTP {0}")]
    AnalyzerStatus(u16),

    /// The analyzer response body could not be decoded, or lacked the
    /// category scores the report needs.
    #[error("PageSpeed response incomplete: {0}")]
    AnalyzerPayload(String),
}

impl ScanError {
    /// Returns true for errors caused by the caller's input rather than by
    /// the analyzer dependency.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ScanError::MissingUrl | ScanError::InvalidUrl(_))
    }
}
