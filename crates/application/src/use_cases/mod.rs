pub mod queries;

pub use queries::{CreateQueryUseCase, GetQueryUseCase};
