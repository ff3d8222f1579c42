use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use chatkit_relay::config::RelayConfig;
use chatkit_relay::routes;
use chatkit_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RelayConfig::from_env();
    // Starting without credentials is allowed; every session request will
    // report the gap until the environment is fixed.
    if let Err(err) = config.credentials() {
        tracing::warn!(%err, "starting without full configuration");
    }

    let port = config.port();
    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("chatkit relay listening on http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
