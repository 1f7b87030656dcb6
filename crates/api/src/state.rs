use fanout_dns_application::{CreateQueryUseCase, GetQueryUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_query: Arc<CreateQueryUseCase>,
    pub get_query: Arc<GetQueryUseCase>,
}
