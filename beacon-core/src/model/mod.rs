mod connection;
mod error;
mod peer;
mod room;
mod signaling;

pub use connection::ConnectionId;
pub use error::JoinError;
pub use peer::PeerInfo;
pub use room::RoomId;
pub use signaling::{IceServerConfig, SignalMessage};
