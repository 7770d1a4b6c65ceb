use crate::model::connection::ConnectionId;
use crate::model::error::JoinError;
use crate::model::peer::PeerInfo;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    pub username: Option<String>,
    pub credential: Option<String>,
}

/// Every frame exchanged over the signaling socket, in both directions.
///
/// The `from` field on peer-to-peer kinds is optional on the way in and is
/// always overwritten by the relay with the authenticated sender id before
/// forwarding; a client-supplied value is never trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SignalMessage {
    /// First frame after the upgrade: tells the client its server-assigned id.
    Welcome { peer_id: ConnectionId },

    /// STUN/TURN addresses handed to the client for its own ICE gathering.
    /// The server never interprets them.
    IceConfig { ice_servers: Vec<IceServerConfig> },

    Join {
        room: RoomId,
        #[serde(default)]
        name: Option<String>,
    },

    /// Explicit exit from the current room; the socket stays open and the
    /// client may join again later.
    Leave,

    JoinAccepted {
        room: RoomId,
        /// Existing members in join order, so the new joiner initiates an
        /// offer toward each of them and never the reverse.
        peers: Vec<PeerInfo>,
    },

    JoinRejected { room: RoomId, reason: JoinError },

    PeerJoined { room: RoomId, peer: PeerInfo },

    PeerLeft { room: RoomId, peer: PeerInfo },

    Offer {
        room: RoomId,
        to: ConnectionId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ConnectionId>,
        payload: Value,
    },

    Answer {
        room: RoomId,
        to: ConnectionId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ConnectionId>,
        payload: Value,
    },

    IceCandidate {
        room: RoomId,
        to: ConnectionId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<ConnectionId>,
        payload: Value,
    },
}
