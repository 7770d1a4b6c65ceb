use crate::AppState;
use axum::Json;
use axum::extract::{Path, State};
use beacon_core::RoomId;
use serde::{Deserialize, Serialize};

/// Occupancy snapshot served by `GET /rooms/{room_id}`. Read-only; an
/// unknown room answers with a zero count rather than an error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancy {
    pub room_id: RoomId,
    pub user_count: usize,
    pub users: Vec<String>,
}

pub async fn room_info(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Json<RoomOccupancy> {
    let room_id = RoomId::from(room_id);
    let members = state.relay.registry().occupants(&room_id).await;

    Json(RoomOccupancy {
        room_id,
        user_count: members.len(),
        users: members.into_iter().map(|m| m.name).collect(),
    })
}
