//! Fanout DNS Application Layer
pub mod ports;
pub mod shutdown;
pub mod use_cases;

pub use ports::{DnsExchanger, ExchangeOutcome, QueryStore, ResolverEndpoint};
pub use shutdown::ShutdownCoordinator;
pub use use_cases::{CreateQueryUseCase, GetQueryUseCase};
