use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medclaim::api::{app, ClaimState};
use medclaim::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medclaim=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // First argument, when numeric, is the port.
    let config = Config::from_env()?.with_port_arg(std::env::args().nth(1));
    tracing::info!(
        requirement = %config.requirement_path.display(),
        output = %config.output_path.display(),
        "Starting claim generator on {}",
        config.server_addr()
    );

    let state = Arc::new(ClaimState::from_config(&config));
    let app = app(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server_addr()).await?;
    tracing::info!("HTTP server started on port {}", config.server_port);

    axum::serve(listener, app).await?;

    Ok(())
}
