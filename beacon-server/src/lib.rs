pub mod config;
pub mod http;
pub mod registry;
pub mod relay;
pub mod signaling;

pub use config::ServerConfig;
pub use relay::MessageRelay;
pub use signaling::{SignalingOutput, SignalingService, ws_handler};

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub signaling: SignalingService,
    pub relay: MessageRelay,
    pub config: Arc<ServerConfig>,
}

/// Build the axum application: the signaling socket plus room diagnostics.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/rooms/{room_id}", get(http::room_info))
        .layer(cors)
        .with_state(state)
}
