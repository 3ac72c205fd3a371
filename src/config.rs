//! Server configuration
//!
//! Configuration is read from environment variables at startup; every
//! setting has a default so the service runs with no environment at all.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the socket address to bind.
pub const BIND_ADDR_ENV: &str = "PWD_VALIDATOR_ADDR";

/// Environment variable holding the contact identifier shown by `GET /`.
pub const CONTACT_ENV: &str = "PWD_VALIDATOR_CONTACT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CONTACT: &str = "pwd-validator";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the HTTP front door.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
    /// Identifier embedded in the root-route greeting.
    pub contact: String,
}

impl ServerConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_VALIDATOR_ADDR`: socket address to bind
    ///   (default: `127.0.0.1:8080`)
    /// - `PWD_VALIDATOR_CONTACT`: identifier embedded in the `GET /`
    ///   greeting (default: `pwd-validator`)
    ///
    /// # Errors
    ///
    /// Returns an error if `PWD_VALIDATOR_ADDR` is set but is not a valid
    /// socket address.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { addr, source })?;

        let contact =
            std::env::var(CONTACT_ENV).unwrap_or_else(|_| DEFAULT_CONTACT.to_string());

        Ok(Self { bind_addr, contact })
    }
}
