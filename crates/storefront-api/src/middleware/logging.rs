//! Access logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

const HEALTH_PATH: &str = "/api/health";

/// Emits one event per request. Health checks are logged at debug, server
/// errors at warn.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let has_query = request.uri().query().is_some();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, has_query, status, duration_ms, "Request failed");
    } else if path == HEALTH_PATH {
        debug!(%method, %path, status, duration_ms, "Health check");
    } else {
        info!(%method, %path, has_query, status, duration_ms, "Request served");
    }

    response
}
