use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use fanout_dns_application::ports::{DnsExchanger, ExchangeOutcome};
use fanout_dns_domain::{DomainError, RecordType};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP exchanger. One ephemeral socket per exchange; send and
/// receive are each bounded by the caller-supplied timeout.
#[derive(Debug, Default)]
pub struct UdpExchanger;

impl UdpExchanger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsExchanger for UdpExchanger {
    async fn exchange(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<ExchangeOutcome, DomainError> {
        let message_bytes = MessageBuilder::build_query(name, record_type)?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("failed to bind UDP socket: {e}")))?;

        let started = Instant::now();

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(&message_bytes, server))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| DomainError::TransportFailed {
                server: server.to_string(),
                message: format!("send: {e}"),
            })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: server.to_string(),
                })?
                .map_err(|e| DomainError::TransportFailed {
                    server: server.to_string(),
                    message: format!("recv: {e}"),
                })?;

        let rtt = started.elapsed();

        // Validate response came from expected server
        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server,
            bytes_received = bytes_received,
            rtt_ms = rtt.as_millis() as u64,
            "UDP response received"
        );

        let response = ResponseParser::parse(&recv_buf)?;

        Ok(ExchangeOutcome {
            rcode: response.status().to_string(),
            records: response.records,
            rtt,
        })
    }
}
