use axum::{routing::get, Router};

use super::handlers::{generate_claim, health_check, index, SharedClaimState};

pub fn site_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

pub fn claim_routes(state: SharedClaimState) -> Router {
    Router::new()
        .route("/generate", get(generate_claim))
        .with_state(state)
}
