use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimulatePayoutRequest {
    investor_id: String,
    investment_id: String,
    /// Amount supplied by the existing frontend (5% of the displayed market
    /// value). When omitted, the server computes the amount from a freshly
    /// read market value instead of trusting client state.
    #[serde(default)]
    payout_amount: Option<f64>,
}

#[derive(Serialize)]
struct SimulatePayoutResponse {
    message: String,
}

async fn simulate_payout(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SimulatePayoutRequest>,
) -> ApiResult<Json<SimulatePayoutResponse>> {
    match body.payout_amount {
        Some(payout_amount) => {
            state
                .payout_service
                .simulate_payout(&body.investor_id, &body.investment_id, payout_amount)
                .await
        }
        None => state
            .payout_service
            .simulate_default_payout(&body.investor_id, &body.investment_id)
            .await
            .map(|_| ()),
    }
    .map_err(|e| ApiError::internal("Error simulating payout", e))?;

    Ok(Json(SimulatePayoutResponse {
        message: "Payout simulated successfully".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/simulate-payout", post(simulate_payout))
}
