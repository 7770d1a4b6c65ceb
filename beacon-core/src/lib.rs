pub mod model;

pub use model::{
    ConnectionId, IceServerConfig, JoinError, PeerInfo, RoomId, SignalMessage,
};
