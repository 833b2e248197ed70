//! HTTP server exposing the scan API.
//!
//! Routes:
//! - `POST /scan` - scan a URL, JSON body `{"url": "..."}`
//! - `GET /healthz` - liveness probe
//!
//! The CORS layer is deliberately permissive and answers OPTIONS preflight
//! requests before the handlers run, matching the contract the browser
//! frontend expects.

mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::scan::Scanner;
use handlers::{health_handler, scan_handler};

pub use handlers::ScanRequest;

/// Builds the application router around a shared scanner.
pub fn router(scanner: Scanner) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/scan", post(scan_handler))
        .route("/healthz", get(health_handler))
        .layer(cors)
        .with_state(Arc::new(scanner))
}

/// Binds the listener and serves the scan API until the process exits.
pub async fn start_server(addr: &str, scanner: Scanner) -> Result<(), anyhow::Error> {
    let app = router(scanner);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind scan server to {}: {}", addr, e))?;

    log::info!("Scan server listening on http://{addr}/");
    log::info!("  - Scan: POST http://{addr}/scan");
    log::info!("  - Health: GET http://{addr}/healthz");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Scan server error: {}", e))?;

    Ok(())
}
