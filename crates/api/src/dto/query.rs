use crate::error::ApiError;
use fanout_dns_domain::{validators, Query, RecordType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Request DTO for creating a Query against the configured DNS resolvers.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQueryRequest {
    /// DNS record type to query for.
    ///
    /// Required. Supported: A, AAAA, CAA, CNAME, DNSKEY, MX, NS, PTR, SOA,
    /// SRV, SVCB and TXT.
    #[serde(rename = "type", default)]
    pub record_type: String,

    /// Domain name to query for.
    ///
    /// Required.
    #[serde(default)]
    pub name: String,
}

impl CreateQueryRequest {
    /// Asserts that all required fields are set and all set fields are
    /// valid, returning the parsed record type. Nothing reaches storage when
    /// this fails.
    pub fn validate(&self) -> Result<RecordType, ApiError> {
        if self.record_type.is_empty() {
            return Err(ApiError::bad_request(".type", "Type of record is required"));
        }
        if self.name.is_empty() {
            return Err(ApiError::bad_request(".name", "Name of domain is required"));
        }

        let record_type = RecordType::from_str(&self.record_type)
            .map_err(|_| ApiError::bad_request(".type", "Record type is not supported"))?;

        validators::validate_query_name(&self.name)
            .map_err(|message| ApiError::bad_request(".name", message))?;

        Ok(record_type)
    }
}

/// Response DTO wrapping a Query, used by both create and get.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub query: Query,
}
