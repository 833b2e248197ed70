//! Scan API handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::error_handling::ScanError;
use crate::scan::Scanner;

/// Inbound scan request body.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// The URL to scan; its absence is an input error.
    pub url: Option<String>,
}

/// `POST /scan` - runs a full scan of the requested URL.
pub async fn scan_handler(
    State(scanner): State<Arc<Scanner>>,
    Json(request): Json<ScanRequest>,
) -> Response {
    let url = match request.url.as_deref() {
        Some(url) if !url.trim().is_empty() => url,
        _ => return error_response(&ScanError::MissingUrl),
    };

    match scanner.scan(url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// `GET /healthz` - liveness probe.
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({"status": "ok"})),
    )
        .into_response()
}

/// Maps a scan failure to the JSON error contract.
///
/// Input errors are the caller's fault (400); a missing API key is a local
/// misconfiguration (500); analyzer failures are an unavailable upstream
/// dependency (502).
fn error_response(error: &ScanError) -> Response {
    let status = if error.is_input_error() {
        StatusCode::BAD_REQUEST
    } else if matches!(error, ScanError::MissingApiKey) {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::BAD_GATEWAY
    };

    log::error!("Scan failed: {error}");
    (
        status,
        Json(serde_json::json!({"error": error.to_string()})),
    )
        .into_response()
}
