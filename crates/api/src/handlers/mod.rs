pub mod health;
pub mod queries;

pub use health::health_check;
pub use queries::{create_query, get_query};
