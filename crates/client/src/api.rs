//! HTTP access to the dashboard backend.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use treem_core::investments::Investment;
use treem_core::investors::InvestorSummary;

/// Frontend-to-backend request failures: transport errors and non-2xx
/// responses.
#[derive(thiserror::Error, Debug)]
pub enum DashboardApiError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

/// The three backend operations the dashboard consumes.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_investor_summary(
        &self,
        investor_id: &str,
    ) -> Result<InvestorSummary, DashboardApiError>;

    async fn get_investments(
        &self,
        investor_id: &str,
    ) -> Result<Vec<Investment>, DashboardApiError>;

    async fn simulate_payout(
        &self,
        investor_id: &str,
        investment_id: &str,
        payout_amount: f64,
    ) -> Result<(), DashboardApiError>;
}

/// `reqwest`-backed [`DashboardApi`] pointed at one backend base URL.
pub struct HttpDashboardApi {
    client: Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Turns a non-2xx response into an [`DashboardApiError::Api`], pulling
    /// the backend's `{"error": …}` message when the body carries one.
    async fn checked(response: Response) -> Result<Response, DashboardApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "no error detail".to_string());
        Err(DashboardApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn get_investor_summary(
        &self,
        investor_id: &str,
    ) -> Result<InvestorSummary, DashboardApiError> {
        debug!("GET investor summary for {}", investor_id);
        let response = self
            .client
            .get(format!(
                "{}/api/investor-summary/{}",
                self.base_url, investor_id
            ))
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn get_investments(
        &self,
        investor_id: &str,
    ) -> Result<Vec<Investment>, DashboardApiError> {
        debug!("GET investments for {}", investor_id);
        let response = self
            .client
            .get(format!("{}/api/investments/{}", self.base_url, investor_id))
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn simulate_payout(
        &self,
        investor_id: &str,
        investment_id: &str,
        payout_amount: f64,
    ) -> Result<(), DashboardApiError> {
        debug!(
            "POST simulate-payout of {} for investment {}",
            payout_amount, investment_id
        );
        let response = self
            .client
            .post(format!("{}/api/simulate-payout", self.base_url))
            .json(&json!({
                "investorId": investor_id,
                "investmentId": investment_id,
                "payoutAmount": payout_amount,
            }))
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }
}
