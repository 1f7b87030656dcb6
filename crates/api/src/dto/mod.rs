pub mod query;

pub use query::{CreateQueryRequest, QueryResponse};
