//! Target URL validation and normalization.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ScanError;

/// Validates and normalizes the URL under scan.
///
/// Adds an https:// prefix if no scheme is present, then requires the result
/// to parse as an absolute http(s) URL with a host: the hostname is needed
/// later for internal/external link classification, so an unparseable URL is
/// rejected before any network call. URLs longer than [`MAX_URL_LENGTH`] are
/// rejected outright.
///
/// # Errors
///
/// * `ScanError::MissingUrl` for an empty or whitespace-only input
/// * `ScanError::InvalidUrl` for oversized, unparsable, or non-http(s) input
pub fn normalize_target_url(raw: &str) -> Result<Url, ScanError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScanError::MissingUrl);
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(oversized_url_error(trimmed));
    }

    let normalized = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(oversized_url_error(&normalized));
    }

    let parsed =
        Url::parse(&normalized).map_err(|_| ScanError::InvalidUrl(trimmed.to_string()))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        _ => Err(ScanError::InvalidUrl(trimmed.to_string())),
    }
}

fn oversized_url_error(url: &str) -> ScanError {
    let preview: String = url.chars().take(50).collect();
    ScanError::InvalidUrl(format!(
        "{preview}... exceeds {MAX_URL_LENGTH} characters"
    ))
}
