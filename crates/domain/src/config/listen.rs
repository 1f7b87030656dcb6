use serde::{Deserialize, Serialize};

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    /// `[host]:<port>` to listen on. An empty host listens on all
    /// interfaces; IPv6 addresses must be bracketed.
    pub addr: String,
}
