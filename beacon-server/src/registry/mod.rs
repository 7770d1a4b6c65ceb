mod connection_manager;
mod room_registry;

pub use connection_manager::ConnectionManager;
pub use room_registry::{Departure, RoomRegistry};
