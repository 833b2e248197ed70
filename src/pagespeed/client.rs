//! PageSpeed Insights API client.

use std::sync::Arc;

use log::debug;

use crate::error_handling::ScanError;
use crate::pagespeed::types::{LighthouseResult, PagespeedResponse};

/// Client for the PageSpeed Insights v5 `runPagespeed` endpoint.
///
/// The endpoint base is injectable so tests can stand up a mock server; the
/// default comes from [`crate::config::DEFAULT_PAGESPEED_ENDPOINT`].
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    api_key: String,
}

impl PageSpeedClient {
    /// Creates a client for the given endpoint base and API key.
    pub fn new(client: Arc<reqwest::Client>, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    /// Runs the external analyzer against a URL, requesting all four
    /// categories (SEO, Performance, Accessibility, Best-Practices).
    ///
    /// # Errors
    ///
    /// Any failure here is fatal to the scan:
    /// - `ScanError::AnalyzerRequest` for transport errors
    /// - `ScanError::AnalyzerStatus` for non-success HTTP statuses
    /// - `ScanError::AnalyzerPayload` for undecodable or incomplete bodies
    pub async fn analyze(&self, url: &str) -> Result<LighthouseResult, ScanError> {
        debug!("Requesting PageSpeed analysis for {url}");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("url", url),
                ("key", self.api_key.as_str()),
                ("category", "SEO"),
                ("category", "PERFORMANCE"),
                ("category", "ACCESSIBILITY"),
                ("category", "BEST_PRACTICES"),
            ])
            .send()
            .await
            .map_err(ScanError::AnalyzerRequest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::AnalyzerStatus(status.as_u16()));
        }

        let payload: PagespeedResponse = response
            .json()
            .await
            .map_err(|e| ScanError::AnalyzerPayload(e.to_string()))?;

        payload
            .lighthouse_result
            .ok_or_else(|| ScanError::AnalyzerPayload("missing lighthouseResult".to_string()))
    }
}
