use beacon_core::{ConnectionId, SignalMessage};
use futures::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub async fn send_signal(ws: &mut WsClient, msg: &SignalMessage) {
    let json = serde_json::to_string(msg).expect("serialize signal");
    ws.send(WsMessage::text(json)).await.expect("send signal");
}

/// Next parsed signal frame; non-text frames are skipped.
pub async fn recv_signal(ws: &mut WsClient) -> SignalMessage {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for signal")
            .expect("socket closed")
            .expect("socket error");

        if let WsMessage::Text(text) = msg {
            return serde_json::from_str(&text).expect("parse signal");
        }
    }
}

pub async fn expect_welcome(ws: &mut WsClient) -> ConnectionId {
    match recv_signal(ws).await {
        SignalMessage::Welcome { peer_id } => peer_id,
        other => panic!("expected welcome, got {:?}", other),
    }
}

pub async fn expect_ice_config(ws: &mut WsClient) {
    match recv_signal(ws).await {
        SignalMessage::IceConfig { ice_servers } => {
            assert!(!ice_servers.is_empty(), "ice-config should list servers");
        }
        other => panic!("expected ice-config, got {:?}", other),
    }
}
