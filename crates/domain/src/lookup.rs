use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The recorded outcome of querying one upstream resolver as part of a Query
/// fanned out across every configured resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lookup {
    /// Name of the upstream resolver, as configured by `name` in
    /// `[[resolvers]]`.
    pub resolver: String,

    /// Round-trip time of the exchange against the upstream resolver, in
    /// milliseconds.
    #[serde(rename = "rtt")]
    pub rtt_ms: u64,

    /// The rcode returned by the resolver when the name could not be
    /// resolved. Set if and only if the exchange completed with a
    /// non-success response code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Records returned by the resolver, if any.
    pub records: Vec<Record>,

    /// UTC timestamp at which this lookup completed.
    pub resolved_at: DateTime<Utc>,
}

impl Lookup {
    /// A lookup that completed with a success rcode, carrying the answer
    /// records (which may legitimately be empty).
    pub fn answered(resolver: impl Into<String>, rtt_ms: u64, records: Vec<Record>) -> Self {
        Self {
            resolver: resolver.into(),
            rtt_ms,
            error: None,
            records,
            resolved_at: Utc::now(),
        }
    }

    /// A lookup that completed with a non-success rcode. The rcode is data,
    /// not a failure of the exchange itself.
    pub fn refused(resolver: impl Into<String>, rtt_ms: u64, rcode: impl Into<String>) -> Self {
        Self {
            resolver: resolver.into(),
            rtt_ms,
            error: Some(rcode.into()),
            records: Vec::new(),
            resolved_at: Utc::now(),
        }
    }
}
