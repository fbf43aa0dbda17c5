use async_trait::async_trait;

use crate::errors::Result;

/// Trait for payout service operations.
#[async_trait]
pub trait PayoutServiceTrait: Send + Sync {
    /// Applies a simulated distribution of `payout_amount` against one
    /// investment and its owning investor's summary. The amount is taken
    /// as given; no validation against current state is performed.
    async fn simulate_payout(
        &self,
        investor_id: &str,
        investment_id: &str,
        payout_amount: f64,
    ) -> Result<()>;

    /// Applies a simulated distribution whose amount is computed server-side
    /// as [`DEFAULT_PAYOUT_RATE`](super::DEFAULT_PAYOUT_RATE) of a freshly
    /// read market value. Returns the amount that was applied.
    async fn simulate_default_payout(
        &self,
        investor_id: &str,
        investment_id: &str,
    ) -> Result<f64>;
}
