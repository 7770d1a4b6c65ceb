use beacon_core::IceServerConfig;
use std::env;
use std::net::SocketAddr;
use tracing::warn;

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Mesh topology scales poorly past a handful of peers, so rooms are
    /// capped (default 6).
    pub room_capacity: usize,
    /// Opaque STUN/TURN addresses handed to clients; never interpreted here.
    pub ice_servers: Vec<IceServerConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            room_capacity: 6,
            ice_servers: vec![IceServerConfig {
                urls: vec!["stun:stun.l.google.com:19302".to_owned()],
                username: None,
                credential: None,
            }],
        }
    }
}

impl ServerConfig {
    /// Environment overrides: `BIND_ADDR`, `ROOM_CAPACITY`, `STUN_URL`,
    /// `TURN_URL` (+ `TURN_USERNAME` / `TURN_CREDENTIAL`).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = env::var("BIND_ADDR") {
            match addr.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!("Ignoring invalid BIND_ADDR '{}': {}", addr, e),
            }
        }

        if let Ok(capacity) = env::var("ROOM_CAPACITY") {
            match capacity.parse::<usize>() {
                Ok(n) => config.room_capacity = n.max(1),
                Err(e) => warn!("Ignoring invalid ROOM_CAPACITY '{}': {}", capacity, e),
            }
        }

        if let Ok(stun_url) = env::var("STUN_URL") {
            config.ice_servers = vec![IceServerConfig {
                urls: vec![stun_url],
                username: None,
                credential: None,
            }];
        }

        if let Ok(turn_url) = env::var("TURN_URL") {
            config.ice_servers.push(IceServerConfig {
                urls: vec![turn_url],
                username: env::var("TURN_USERNAME").ok(),
                credential: env::var("TURN_CREDENTIAL").ok(),
            });
        }

        config
    }
}
