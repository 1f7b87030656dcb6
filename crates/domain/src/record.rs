use serde::{Deserialize, Serialize};

/// A DNS resource record returned by an upstream resolver, normalized out of
/// its wire form. Only the fields meaningful for the record's type are set:
/// `priority` for MX/SRV/SVCB, `weight` and `port` for SRV, `tag` for CAA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Maximum time, in seconds, resolvers are expected to cache this record.
    pub ttl: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// The record's payload, such as an IP address for A/AAAA or a target
    /// name for CNAME. TXT records carry one entry per character string.
    pub content: Vec<String>,
}

impl Record {
    pub fn new(ttl: u32, content: Vec<String>) -> Self {
        Self {
            ttl,
            priority: None,
            weight: None,
            port: None,
            tag: None,
            content,
        }
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
