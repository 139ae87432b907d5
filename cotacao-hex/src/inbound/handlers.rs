//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cotacao_types::{BidResponse, RateProvider, RateStore, ServiceError, StoredRate};

use super::deadline::InboundDeadline;
use crate::RateService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider, S: RateStore> {
    pub service: RateService<P, S>,
}

/// Wrapper to implement IntoResponse for ServiceError (orphan rule workaround).
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

/// Every failure is a plain-text 500; the message names the failing stage.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Fetch, persist and return the current bid.
#[tracing::instrument(skip_all, fields(inbound = ?deadline.0))]
pub async fn current_rate<P: RateProvider, S: RateStore>(
    State(state): State<Arc<AppState<P, S>>>,
    deadline: InboundDeadline,
) -> Result<Json<BidResponse>, ApiError> {
    let bid = state.service.current_rate(deadline.0).await?;
    Ok(Json(bid))
}

/// List every persisted rate.
#[tracing::instrument(skip_all)]
pub async fn history<P: RateProvider, S: RateStore>(
    State(state): State<Arc<AppState<P, S>>>,
) -> Result<Json<Vec<StoredRate>>, ApiError> {
    let rows = state.service.history().await?;
    Ok(Json(rows))
}
