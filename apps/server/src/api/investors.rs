use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use treem_core::investors::InvestorSummary;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn get_investor_summary(
    Path(investor_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<InvestorSummary>> {
    let summary = state
        .investor_service
        .get_investor_summary(&investor_id)
        .await
        .map_err(|e| ApiError::internal("Error fetching investor summary", e))?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/investor-summary/{investorId}",
        get(get_investor_summary),
    )
}
