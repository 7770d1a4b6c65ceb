use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};

/// A room member as listed to other clients: id plus display name.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct PeerInfo {
    pub id: ConnectionId,
    pub name: String,
}
