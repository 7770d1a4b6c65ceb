use crate::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::SignalMessage;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The id is assigned here and nowhere else; clients cannot spoof it.
    let connection_id = state.relay.connections().register();
    state.signaling.add_peer(connection_id, tx);
    info!("New WebSocket connection: {}", connection_id);

    state.signaling.send_signal(
        &connection_id,
        &SignalMessage::Welcome {
            peer_id: connection_id,
        },
    );
    state.signaling.send_signal(
        &connection_id,
        &SignalMessage::IceConfig {
            ice_servers: state.config.ice_servers.clone(),
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay = state.relay.clone();
        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<SignalMessage>(&text) {
                        Ok(signal) => relay.handle_message(connection_id, signal).await,
                        Err(e) => warn!("Malformed message from {}: {}", connection_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Runs exactly once per socket, after both pump tasks are done; every
    // step inside is idempotent anyway.
    state.relay.handle_disconnect(connection_id).await;
    state.signaling.remove_peer(&connection_id);
    info!("WebSocket disconnected: {}", connection_id);
}
