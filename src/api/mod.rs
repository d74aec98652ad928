pub mod handlers;
pub mod pages;
pub mod routes;

use axum::Router;

use crate::middleware::{LoggingLayer, RequestIdLayer};

pub use handlers::{ClaimState, SharedClaimState};
pub use routes::{claim_routes, site_routes};

/// The complete HTTP application: landing page, health check and claim
/// generation, with request ids and per-request logging.
pub fn app(state: SharedClaimState) -> Router {
    Router::new()
        .merge(site_routes())
        .merge(claim_routes(state))
        .layer(LoggingLayer)
        .layer(RequestIdLayer)
}
