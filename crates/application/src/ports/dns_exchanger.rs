use async_trait::async_trait;
use fanout_dns_domain::{DomainError, Record, RecordType};
use std::net::SocketAddr;
use std::time::Duration;

/// One upstream resolver a Query is fanned out to, resolved from
/// configuration at startup.
#[derive(Debug, Clone)]
pub struct ResolverEndpoint {
    pub name: String,
    pub addr: SocketAddr,
}

impl ResolverEndpoint {
    pub fn new(name: impl Into<String>, addr: SocketAddr) -> Self {
        Self {
            name: name.into(),
            addr,
        }
    }
}

/// Result of one completed DNS exchange. A non-success rcode is still a
/// completed exchange; transport-level failures surface as `DomainError`
/// from `DnsExchanger::exchange` instead.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    /// Uppercase rcode mnemonic, e.g. "NOERROR" or "NXDOMAIN".
    pub rcode: String,

    /// Answer records, normalized. Empty on non-success rcodes.
    pub records: Vec<Record>,

    /// Measured round-trip time of the exchange.
    pub rtt: Duration,
}

impl ExchangeOutcome {
    pub fn is_success(&self) -> bool {
        self.rcode == "NOERROR"
    }
}

/// Issues a single DNS exchange against a single upstream resolver.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<ExchangeOutcome, DomainError>;
}
