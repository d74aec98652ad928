use axum::{http::header, response::IntoResponse};

/// Liveness check. Always `200 OK` with a plain-text body.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("Health check passed");
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
