use async_trait::async_trait;
use fanout_dns_application::ports::{DnsExchanger, ExchangeOutcome};
use fanout_dns_domain::{DomainError, Record, RecordType};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// What a scripted resolver does when exchanged with.
#[derive(Clone)]
pub enum ScriptedExchange {
    /// Completes with NOERROR and the given records.
    Answer { rtt_ms: u64, records: Vec<Record> },
    /// Completes with a non-success rcode and no records.
    Rcode { rtt_ms: u64, rcode: &'static str },
    /// Fails at the transport level.
    TransportFailure,
    /// Never answers; the fan-out deadline has to reap it.
    Hang,
}

/// DnsExchanger whose answers are scripted per upstream address.
#[derive(Clone, Default)]
pub struct ScriptedExchanger {
    script: Arc<RwLock<HashMap<SocketAddr, ScriptedExchange>>>,
}

impl ScriptedExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn script(&self, server: SocketAddr, exchange: ScriptedExchange) {
        self.script.write().await.insert(server, exchange);
    }
}

#[async_trait]
impl DnsExchanger for ScriptedExchanger {
    async fn exchange(
        &self,
        _name: &str,
        _record_type: RecordType,
        server: SocketAddr,
        _timeout: Duration,
    ) -> Result<ExchangeOutcome, DomainError> {
        let scripted = self.script.read().await.get(&server).cloned();

        match scripted {
            Some(ScriptedExchange::Answer { rtt_ms, records }) => Ok(ExchangeOutcome {
                rcode: "NOERROR".to_string(),
                records,
                rtt: Duration::from_millis(rtt_ms),
            }),
            Some(ScriptedExchange::Rcode { rtt_ms, rcode }) => Ok(ExchangeOutcome {
                rcode: rcode.to_string(),
                records: Vec::new(),
                rtt: Duration::from_millis(rtt_ms),
            }),
            Some(ScriptedExchange::TransportFailure) => Err(DomainError::TransportFailed {
                server: server.to_string(),
                message: "connection refused".to_string(),
            }),
            Some(ScriptedExchange::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(DomainError::TransportTimeout {
                    server: server.to_string(),
                })
            }
            None => Err(DomainError::TransportFailed {
                server: server.to_string(),
                message: "no scripted response".to_string(),
            }),
        }
    }
}
