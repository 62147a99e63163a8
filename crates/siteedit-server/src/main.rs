//! Binary entrypoint for the siteedit HTTP server.
//!
//! Configuration comes from environment variables; see [`ServerConfig`].

use siteedit_server::config::ServerConfig;
use siteedit_server::router::build_router;
use siteedit_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    tracing::info!(interpreter = state.interpreter.name(), "session store ready");

    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!("siteedit server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
