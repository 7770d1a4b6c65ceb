use beacon_core::{ConnectionId, JoinError, PeerInfo, RoomId};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Default)]
struct Room {
    /// Insertion order is join order; peer lists are always enumerated in
    /// this order so the newest joiner initiates offers, never the reverse.
    members: Vec<PeerInfo>,
}

#[derive(Default)]
struct RegistryState {
    rooms: HashMap<RoomId, Room>,
    memberships: HashMap<ConnectionId, RoomId>,
}

/// What `leave` returns so the relay can notify the remaining members.
#[derive(Debug, Clone)]
pub struct Departure {
    pub room: RoomId,
    pub peer: PeerInfo,
    pub remaining: Vec<PeerInfo>,
}

/// Source of truth for room membership. All mutations funnel through one
/// lock; invariants: a connection is in at most one room, a room never
/// exceeds capacity, and a room exists only while it has members.
pub struct RoomRegistry {
    state: Mutex<RegistryState>,
    capacity: usize,
}

impl RoomRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admit `connection_id` into `room_id`, creating the room on first
    /// join. Returns the *other* current members in join order.
    pub async fn join(
        &self,
        room_id: &RoomId,
        connection_id: ConnectionId,
        display_name: &str,
    ) -> Result<Vec<PeerInfo>, JoinError> {
        let mut state = self.state.lock().await;

        if let Some(current) = state.memberships.get(&connection_id) {
            return Err(JoinError::AlreadyInRoom {
                room: current.clone(),
            });
        }

        let room = state.rooms.entry(room_id.clone()).or_insert_with(|| {
            info!("Created new room: {}", room_id);
            Room::default()
        });

        if room.members.len() >= self.capacity {
            return Err(JoinError::RoomFull {
                capacity: self.capacity,
            });
        }

        let peers = room.members.clone();
        room.members.push(PeerInfo {
            id: connection_id,
            name: display_name.to_owned(),
        });
        state.memberships.insert(connection_id, room_id.clone());

        Ok(peers)
    }

    /// Remove `connection_id` from whichever room holds it, deleting the
    /// room once empty. Returns `None` when the connection is unjoined, so
    /// duplicate disconnect events degrade to a no-op.
    pub async fn leave(&self, connection_id: &ConnectionId) -> Option<Departure> {
        let mut state = self.state.lock().await;
        let room_id = state.memberships.remove(connection_id)?;

        let Some(room) = state.rooms.get_mut(&room_id) else {
            warn!("Membership pointed at missing room: {}", room_id);
            return None;
        };

        let idx = room
            .members
            .iter()
            .position(|m| m.id == *connection_id)?;
        let peer = room.members.remove(idx);
        let remaining = room.members.clone();

        if remaining.is_empty() {
            state.rooms.remove(&room_id);
            info!("Room {} deleted (empty)", room_id);
        }

        Some(Departure {
            room: room_id,
            peer,
            remaining,
        })
    }

    /// Join-order snapshot of a room's member ids.
    pub async fn members_of(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        let state = self.state.lock().await;
        state
            .rooms
            .get(room_id)
            .map(|room| room.members.iter().map(|m| m.id).collect())
            .unwrap_or_default()
    }

    /// True only if both connections are current members of `room_id`.
    /// Gates every forwarded signal against forged cross-room targets.
    pub async fn co_members(
        &self,
        room_id: &RoomId,
        a: &ConnectionId,
        b: &ConnectionId,
    ) -> bool {
        let state = self.state.lock().await;
        state.rooms.get(room_id).is_some_and(|room| {
            let has = |id: &ConnectionId| room.members.iter().any(|m| m.id == *id);
            has(a) && has(b)
        })
    }

    /// Diagnostic snapshot for the HTTP layer; empty for unknown rooms.
    pub async fn occupants(&self, room_id: &RoomId) -> Vec<PeerInfo> {
        let state = self.state.lock().await;
        state
            .rooms
            .get(room_id)
            .map(|room| room.members.clone())
            .unwrap_or_default()
    }
}
