use anyhow::Context;
use beacon_server::registry::{ConnectionManager, RoomRegistry};
use beacon_server::{AppState, MessageRelay, ServerConfig, SignalingService, app};
use std::sync::Arc;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env();

    let connections = Arc::new(ConnectionManager::new());
    let registry = Arc::new(RoomRegistry::new(config.room_capacity));
    let signaling = SignalingService::new();
    let relay = MessageRelay::new(connections, registry, Arc::new(signaling.clone()));

    let state = AppState {
        signaling,
        relay,
        config: Arc::new(config.clone()),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .context("Failed to bind listener")?;
    info!("Signaling server listening on http://{}", config.bind_addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
