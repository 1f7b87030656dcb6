use axum::extract::{Path, State};
use axum::response::Json;
use tracing::debug;
use uuid::Uuid;

use crate::dto::{CreateQueryRequest, QueryResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/queries
///
/// Begins querying the upstream resolvers for the requested record type and
/// name. The response carries the persisted Query immediately; lookups land
/// asynchronously and are visible through subsequent reads.
pub async fn create_query(
    State(state): State<AppState>,
    Json(req): Json<CreateQueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let record_type = req.validate()?;

    let query = state.create_query.execute(record_type, &req.name).await?;

    debug!(query_id = %query.id, record_type = %query.record_type, name = %query.name, "query created");

    Ok(Json(QueryResponse { query }))
}

/// GET /api/v1/queries/{id}
///
/// Retrieves a previously requested Query. Returns the NotFound error code
/// if it does not exist, either because it never did or because the backend
/// expired it.
pub async fn get_query(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QueryResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::bad_request(".id", "Invalid UUID for Query ID"))?;

    let query = state.get_query.execute(id).await?;

    Ok(Json(QueryResponse { query }))
}
