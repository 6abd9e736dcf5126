//! Server configuration.
//!
//! The service listens on a fixed address. There is no configuration file,
//! command-line flag, or environment variable; the struct exists so tests
//! can bind an ephemeral loopback port instead.

use std::net::{Ipv4Addr, SocketAddr};

/// TCP port the daemon listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub listen: SocketAddr,
}

impl ServerConfig {
    /// Configuration for an ephemeral port on the loopback interface.
    pub fn loopback_ephemeral() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}
