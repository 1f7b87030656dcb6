use crate::lookup::Lookup;
use crate::record_type::RecordType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user request to resolve one (record type, domain name) pair against
/// every configured upstream resolver.
///
/// `id` and `created_at` are assigned exactly once by the storage layer.
/// `lookups` is append-only while the query is in flight, in completion
/// order, and is bounded by the number of resolvers configured at fan-out
/// time. `finished_at` is set at most once, by the finalize step, and is
/// never cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub id: Uuid,

    /// The DNS record type resolved against each configured resolver.
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// The domain name resolved against each configured resolver.
    pub name: String,

    /// Outcomes recorded per resolver, in completion order.
    pub lookups: Vec<Lookup>,

    pub created_at: DateTime<Utc>,

    /// None while lookups are still in flight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Query {
    /// A freshly created query with no lookups. Called by storage backends,
    /// which own id and timestamp assignment.
    pub fn new(id: Uuid, record_type: RecordType, name: impl Into<String>) -> Self {
        Self {
            id,
            record_type,
            name: name.into(),
            lookups: Vec::new(),
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }
}
