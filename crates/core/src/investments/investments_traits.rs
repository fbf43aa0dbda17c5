use async_trait::async_trait;

use super::investments_model::Investment;
use crate::errors::Result;

/// Trait for investment repository operations.
///
/// `market_value` is the only column this layer ever writes.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Equality-filtered multi-row read; no ordering is imposed here.
    async fn list_by_investor(&self, investor_id: &str) -> Result<Vec<Investment>>;

    /// Point read of a single investment's current market value.
    async fn get_market_value(&self, investment_id: &str) -> Result<f64>;

    /// Partial update of one investment's market value.
    async fn update_market_value(&self, investment_id: &str, market_value: f64) -> Result<()>;
}

/// Trait for investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn get_investments(&self, investor_id: &str) -> Result<Vec<Investment>>;
}
