use crate::registry::{ConnectionManager, RoomRegistry};
use crate::signaling::SignalingOutput;
use beacon_core::{ConnectionId, PeerInfo, RoomId, SignalMessage};
use std::sync::Arc;
use tracing::{info, warn};

/// Validates and forwards signaling traffic between members of a room.
///
/// Registry mutations happen before any notification is sent; delivery is
/// fire-and-forget over an already-reliable ordered channel, so there are
/// no retries.
#[derive(Clone)]
pub struct MessageRelay {
    connections: Arc<ConnectionManager>,
    registry: Arc<RoomRegistry>,
    output: Arc<dyn SignalingOutput>,
}

impl MessageRelay {
    pub fn new(
        connections: Arc<ConnectionManager>,
        registry: Arc<RoomRegistry>,
        output: Arc<dyn SignalingOutput>,
    ) -> Self {
        Self {
            connections,
            registry,
            output,
        }
    }

    pub fn connections(&self) -> &ConnectionManager {
        &self.connections
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Dispatch one parsed message. `sender` is the authenticated id of the
    /// connection the frame arrived on; any client-supplied `from` field is
    /// discarded in favor of it.
    pub async fn handle_message(&self, sender: ConnectionId, msg: SignalMessage) {
        match msg {
            SignalMessage::Join { room, name } => self.handle_join(sender, room, name).await,

            SignalMessage::Leave => self.handle_leave(sender).await,

            SignalMessage::Offer {
                room, to, payload, ..
            } => {
                let forwarded = SignalMessage::Offer {
                    room: room.clone(),
                    to,
                    from: Some(sender),
                    payload,
                };
                self.forward(sender, &room, to, forwarded).await;
            }

            SignalMessage::Answer {
                room, to, payload, ..
            } => {
                let forwarded = SignalMessage::Answer {
                    room: room.clone(),
                    to,
                    from: Some(sender),
                    payload,
                };
                self.forward(sender, &room, to, forwarded).await;
            }

            SignalMessage::IceCandidate {
                room, to, payload, ..
            } => {
                let forwarded = SignalMessage::IceCandidate {
                    room: room.clone(),
                    to,
                    from: Some(sender),
                    payload,
                };
                self.forward(sender, &room, to, forwarded).await;
            }

            _ => warn!("Ignoring server-only message kind from {}", sender),
        }
    }

    /// Disconnect cleanup: same as an explicit leave, then the metadata
    /// record goes away. Safe to call more than once.
    pub async fn handle_disconnect(&self, sender: ConnectionId) {
        self.handle_leave(sender).await;
        self.connections.remove(&sender);
    }

    async fn handle_join(&self, sender: ConnectionId, room: RoomId, name: Option<String>) {
        if let Some(name) = name.as_deref() {
            self.connections.set_display_name(&sender, name);
        }
        let display_name = self
            .connections
            .display_name(&sender)
            .unwrap_or_else(|| sender.to_string());

        match self.registry.join(&room, sender, &display_name).await {
            Ok(peers) => {
                info!(
                    "{} ({}) joined room {} ({} existing peers)",
                    display_name,
                    sender,
                    room,
                    peers.len()
                );

                self.output
                    .send(
                        &sender,
                        SignalMessage::JoinAccepted {
                            room: room.clone(),
                            peers: peers.clone(),
                        },
                    )
                    .await;

                let joined = PeerInfo {
                    id: sender,
                    name: display_name,
                };
                for peer in &peers {
                    self.output
                        .send(
                            &peer.id,
                            SignalMessage::PeerJoined {
                                room: room.clone(),
                                peer: joined.clone(),
                            },
                        )
                        .await;
                }
            }
            Err(reason) => {
                warn!("Join rejected for {} in room {}: {}", sender, room, reason);
                self.output
                    .send(&sender, SignalMessage::JoinRejected { room, reason })
                    .await;
            }
        }
    }

    async fn handle_leave(&self, sender: ConnectionId) {
        let Some(departure) = self.registry.leave(&sender).await else {
            return;
        };

        info!(
            "{} ({}) left room {}",
            departure.peer.name, sender, departure.room
        );

        for peer in &departure.remaining {
            self.output
                .send(
                    &peer.id,
                    SignalMessage::PeerLeft {
                        room: departure.room.clone(),
                        peer: departure.peer.clone(),
                    },
                )
                .await;
        }
    }

    async fn forward(
        &self,
        sender: ConnectionId,
        room: &RoomId,
        target: ConnectionId,
        msg: SignalMessage,
    ) {
        if !self.registry.co_members(room, &sender, &target).await {
            warn!(
                "Dropping signal from {} to {}: not co-members of room {}",
                sender, target, room
            );
            return;
        }
        self.output.send(&target, msg).await;
    }
}
