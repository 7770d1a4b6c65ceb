use async_trait::async_trait;
use beacon_core::{ConnectionId, SignalMessage};

/// Outbound half of the relay. Implemented by the WebSocket service in
/// production and by a capture mock in tests.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver one message to one connection, fire-and-forget.
    async fn send(&self, to: &ConnectionId, msg: SignalMessage);
}
