//! Investment repository backed by the `investments` table.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use treem_core::errors::Result;
use treem_core::investments::{Investment, InvestmentRepositoryTrait};

use crate::rest::SupabaseRestClient;

const TABLE: &str = "investments";

#[derive(Deserialize)]
struct MarketValueRow {
    market_value: f64,
}

pub struct InvestmentRepository {
    rest: SupabaseRestClient,
}

impl InvestmentRepository {
    pub fn new(rest: SupabaseRestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    async fn list_by_investor(&self, investor_id: &str) -> Result<Vec<Investment>> {
        Ok(self
            .rest
            .select_many(TABLE, "investor_id", investor_id, "*")
            .await?)
    }

    async fn get_market_value(&self, investment_id: &str) -> Result<f64> {
        let row: MarketValueRow = self
            .rest
            .select_one(TABLE, "id", investment_id, "market_value")
            .await?;
        Ok(row.market_value)
    }

    async fn update_market_value(&self, investment_id: &str, market_value: f64) -> Result<()> {
        self.rest
            .update(
                TABLE,
                "id",
                investment_id,
                &json!({ "market_value": market_value }),
            )
            .await?;
        Ok(())
    }
}
