use beacon_core::ConnectionId;
use dashmap::DashMap;

struct ConnectionMeta {
    display_name: String,
}

/// Per-connection metadata, keyed by the server-assigned id. Membership is
/// not tracked here; the [`RoomRegistry`](crate::registry::RoomRegistry) is
/// the sole authority for who is in which room.
pub struct ConnectionManager {
    connections: DashMap<ConnectionId, ConnectionMeta>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Allocate an id for a freshly opened channel and register it with a
    /// generated placeholder name.
    pub fn register(&self) -> ConnectionId {
        let id = ConnectionId::new();
        self.connections.insert(
            id,
            ConnectionMeta {
                display_name: placeholder_name(&id),
            },
        );
        id
    }

    /// Store a user-supplied display name. Names are not unique; blank
    /// input keeps the placeholder.
    pub fn set_display_name(&self, id: &ConnectionId, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(mut meta) = self.connections.get_mut(id) {
            meta.display_name = name.to_owned();
        }
    }

    pub fn display_name(&self, id: &ConnectionId) -> Option<String> {
        self.connections.get(id).map(|m| m.display_name.clone())
    }

    /// Discard the metadata record. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &ConnectionId) {
        self.connections.remove(id);
    }
}

fn placeholder_name(id: &ConnectionId) -> String {
    let id = id.to_string();
    format!("guest-{}", &id[..8])
}
