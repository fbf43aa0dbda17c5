use async_trait::async_trait;

use super::investors_model::{DistributionTotals, InvestorSummary};
use crate::errors::Result;

/// Trait for investor-summary repository operations.
///
/// Rows are created and destroyed entirely outside this system; the only
/// write this layer ever performs is the distribution-totals update used by
/// the payout flow.
#[async_trait]
pub trait InvestorRepositoryTrait: Send + Sync {
    /// Point read of the full summary row for one investor.
    async fn get_summary(&self, investor_id: &str) -> Result<InvestorSummary>;

    /// Point read of only the columns the payout flow mutates.
    async fn get_distribution_totals(&self, investor_id: &str) -> Result<DistributionTotals>;

    /// Partial update of the distribution columns for one investor.
    async fn update_distribution_totals(
        &self,
        investor_id: &str,
        totals: DistributionTotals,
    ) -> Result<()>;
}

/// Trait for investor service operations.
#[async_trait]
pub trait InvestorServiceTrait: Send + Sync {
    async fn get_investor_summary(&self, investor_id: &str) -> Result<InvestorSummary>;
}
