use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Default port for plain DNS over UDP.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// One upstream DNS resolver that every Query is fanned out to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Display name of the resolver, recorded on each Lookup.
    pub name: String,

    /// IP address of the resolver.
    pub addr: String,

    /// Port the resolver accepts queries on (default: 53).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ResolverConfig {
    /// The socket address queries are sent to, applying the port default.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .addr
            .parse()
            .map_err(|_| ConfigError::invalid("addr", format!("not an IP address: {}", self.addr)))?;

        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_DNS_PORT)))
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::invalid(
                format!("{field}.name"),
                "name of resolver is required",
            ));
        }
        if self.addr.is_empty() {
            return Err(ConfigError::invalid(
                format!("{field}.addr"),
                "addr of resolver is required",
            ));
        }

        self.socket_addr()
            .map_err(|_| ConfigError::invalid(format!("{field}.addr"), "not an IP address"))?;

        Ok(())
    }
}
