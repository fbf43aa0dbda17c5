//! Investor-summary repository backed by the `investor_summary` table.

use async_trait::async_trait;
use serde_json::json;
use treem_core::errors::Result;
use treem_core::investors::{DistributionTotals, InvestorRepositoryTrait, InvestorSummary};

use crate::rest::SupabaseRestClient;

const TABLE: &str = "investor_summary";
const FILTER_COLUMN: &str = "investor_id";

pub struct InvestorRepository {
    rest: SupabaseRestClient,
}

impl InvestorRepository {
    pub fn new(rest: SupabaseRestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl InvestorRepositoryTrait for InvestorRepository {
    async fn get_summary(&self, investor_id: &str) -> Result<InvestorSummary> {
        Ok(self
            .rest
            .select_one(TABLE, FILTER_COLUMN, investor_id, "*")
            .await?)
    }

    async fn get_distribution_totals(&self, investor_id: &str) -> Result<DistributionTotals> {
        Ok(self
            .rest
            .select_one(
                TABLE,
                FILTER_COLUMN,
                investor_id,
                "distributions_received,portfolio_value",
            )
            .await?)
    }

    async fn update_distribution_totals(
        &self,
        investor_id: &str,
        totals: DistributionTotals,
    ) -> Result<()> {
        self.rest
            .update(
                TABLE,
                FILTER_COLUMN,
                investor_id,
                &json!({
                    "distributions_received": totals.distributions_received,
                    "portfolio_value": totals.portfolio_value,
                }),
            )
            .await?;
        Ok(())
    }
}
