//! Server configuration

use tankrelay_shared::MAX_HISTORY;

/// Configuration for the relay server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Capacity bound of the command history log
    pub history_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            history_capacity: MAX_HISTORY,
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// `TANKRELAY_ADDR` overrides the bind address.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("TANKRELAY_ADDR") {
            config.bind_addr = addr;
        }
        config
    }
}
