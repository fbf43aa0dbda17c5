use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use treem_core::investments::Investment;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn get_investments(
    Path(investor_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state
        .investment_service
        .get_investments(&investor_id)
        .await
        .map_err(|e| ApiError::internal("Error fetching investments", e))?;
    Ok(Json(investments))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/investments/{investorId}", get(get_investments))
}
