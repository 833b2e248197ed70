//! Raw page fetching.
//!
//! Retrieves the target page's HTML for markup analysis. A failed fetch is
//! never fatal to the scan: the external analyzer may still have succeeded,
//! so failures degrade to an empty document and are only logged.

use log::{debug, warn};

use crate::config::MAX_RESPONSE_BODY_SIZE;

/// Fetches the raw HTML of a page, degrading to an empty string on failure.
///
/// Failure here means any of: transport error, timeout, non-success HTTP
/// status, an advertised body larger than [`MAX_RESPONSE_BODY_SIZE`], or an
/// unreadable body. All of these produce an empty document, which the markup
/// analyzer turns into an all-zero signals record.
///
/// # Arguments
///
/// * `client` - HTTP client configured with the scan user agent and timeout
/// * `url` - The target URL (already validated by the caller)
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> String {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Page fetch failed for {url}: {e}");
            return String::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("Page fetch for {url} returned HTTP {status}");
        return String::new();
    }

    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BODY_SIZE {
            warn!(
                "Page fetch for {url} advertised {length} bytes (limit: {MAX_RESPONSE_BODY_SIZE}), skipping body"
            );
            return String::new();
        }
    }

    match response.text().await {
        Ok(body) => {
            debug!("Fetched {} bytes from {url}", body.len());
            body
        }
        Err(e) => {
            warn!("Failed to read page body for {url}: {e}");
            String::new()
        }
    }
}
