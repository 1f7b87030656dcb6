use fanout_dns_domain::{DomainError, Record};
use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

/// A parsed upstream response: the rcode plus the answer records normalized
/// to the storage shape. Records are only collected on a success rcode; a
/// non-success response carries its rcode as data and nothing else.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub rcode: ResponseCode,
    pub records: Vec<Record>,
}

impl ParsedResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    /// Uppercase rcode mnemonic recorded on a Lookup.
    pub fn status(&self) -> &'static str {
        Self::rcode_to_status(self.rcode)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::SerializationError(format!("failed to parse DNS response: {e}"))
        })?;

        let rcode = message.response_code();

        let mut records = Vec::new();
        if rcode == ResponseCode::NoError {
            for answer in message.answers() {
                if let Some(record) = Self::normalize(answer.ttl(), answer.data()) {
                    records.push(record);
                }
            }
        }

        debug!(rcode = ?rcode, records = records.len(), "DNS response parsed");

        Ok(ParsedResponse { rcode, records })
    }

    /// Normalizes one answer's rdata, populating only the fields meaningful
    /// for its type. Unsupported rdata is skipped.
    fn normalize(ttl: u32, data: &RData) -> Option<Record> {
        match data {
            RData::A(a) => Some(Record::new(ttl, vec![a.0.to_string()])),
            RData::AAAA(aaaa) => Some(Record::new(ttl, vec![aaaa.0.to_string()])),
            RData::CAA(caa) => Some(
                Record::new(ttl, vec![String::from_utf8_lossy(caa.raw_value()).into_owned()])
                    .with_tag(caa.tag()),
            ),
            RData::CNAME(cname) => Some(Record::new(ttl, vec![cname.to_utf8()])),
            RData::DNSSEC(DNSSECRData::DNSKEY(dnskey)) => {
                Some(Record::new(ttl, vec![dnskey.to_string()]))
            }
            RData::MX(mx) => Some(
                Record::new(ttl, vec![mx.exchange().to_utf8()]).with_priority(mx.preference()),
            ),
            RData::NS(ns) => Some(Record::new(ttl, vec![ns.to_utf8()])),
            RData::PTR(ptr) => Some(Record::new(ttl, vec![ptr.to_utf8()])),
            RData::SOA(soa) => Some(Record::new(ttl, vec![soa.to_string()])),
            RData::SRV(srv) => Some(
                Record::new(ttl, vec![srv.target().to_utf8()])
                    .with_priority(srv.priority())
                    .with_weight(srv.weight())
                    .with_port(srv.port()),
            ),
            RData::SVCB(svcb) => Some(
                Record::new(ttl, vec![svcb.target_name().to_utf8()])
                    .with_priority(svcb.svc_priority()),
            ),
            RData::TXT(txt) => Some(Record::new(
                ttl,
                txt.txt_data()
                    .iter()
                    .map(|data| String::from_utf8_lossy(data).into_owned())
                    .collect(),
            )),
            _ => None,
        }
    }
}
