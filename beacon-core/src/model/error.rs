use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a join request was rejected. Serialized verbatim into the
/// `join-rejected` message so clients can tell the cases apart.
#[derive(Debug, Error, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum JoinError {
    #[error("room is full (max {capacity} peers)")]
    RoomFull { capacity: usize },

    #[error("already a member of room '{room}'")]
    AlreadyInRoom { room: RoomId },
}
