use log::{debug, warn};
use std::sync::Arc;

use super::payouts_traits::PayoutServiceTrait;
use crate::errors::Result;
use crate::investments::InvestmentRepositoryTrait;
use crate::investors::{DistributionTotals, InvestorRepositoryTrait};

/// Fraction of an investment's market value distributed per simulated payout
/// when the caller does not supply an explicit amount.
pub const DEFAULT_PAYOUT_RATE: f64 = 0.05;

/// Orchestrates the read/read/write/write payout sequence across an
/// investment and its owning investor's summary.
///
/// The two writes are independent store operations with no transaction
/// spanning them. If the summary update fails after the investment update
/// has committed, the store is left inconsistent (market value reduced,
/// summary untouched) and no compensating write is attempted. Concurrent
/// invocations against the same rows can lose updates, since writes use
/// the values read at the start of the sequence.
pub struct PayoutService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    investor_repository: Arc<dyn InvestorRepositoryTrait>,
}

impl PayoutService {
    pub fn new(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        investor_repository: Arc<dyn InvestorRepositoryTrait>,
    ) -> Self {
        Self {
            investment_repository,
            investor_repository,
        }
    }

    /// Steps 2-4 of the sequence, given the market value read in step 1.
    async fn apply(
        &self,
        investor_id: &str,
        investment_id: &str,
        market_value: f64,
        payout_amount: f64,
    ) -> Result<()> {
        let totals = self
            .investor_repository
            .get_distribution_totals(investor_id)
            .await?;

        self.investment_repository
            .update_market_value(investment_id, market_value - payout_amount)
            .await?;

        // Not transactional with the write above: a failure here leaves the
        // investment mutated and the summary untouched.
        let updated = DistributionTotals {
            distributions_received: totals.distributions_received + payout_amount,
            portfolio_value: totals.portfolio_value - payout_amount,
        };
        if let Err(err) = self
            .investor_repository
            .update_distribution_totals(investor_id, updated)
            .await
        {
            warn!(
                "Summary update failed after investment {} was already written: {}",
                investment_id, err
            );
            return Err(err);
        }

        debug!(
            "Payout of {} applied to investment {} for investor {}",
            payout_amount, investment_id, investor_id
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl PayoutServiceTrait for PayoutService {
    async fn simulate_payout(
        &self,
        investor_id: &str,
        investment_id: &str,
        payout_amount: f64,
    ) -> Result<()> {
        debug!(
            "Simulating payout of {} for investor {} / investment {}",
            payout_amount, investor_id, investment_id
        );
        let market_value = self
            .investment_repository
            .get_market_value(investment_id)
            .await?;
        self.apply(investor_id, investment_id, market_value, payout_amount)
            .await
    }

    async fn simulate_default_payout(
        &self,
        investor_id: &str,
        investment_id: &str,
    ) -> Result<f64> {
        let market_value = self
            .investment_repository
            .get_market_value(investment_id)
            .await?;
        let payout_amount = market_value * DEFAULT_PAYOUT_RATE;
        debug!(
            "Simulating default payout of {} ({} of {}) for investor {} / investment {}",
            payout_amount, DEFAULT_PAYOUT_RATE, market_value, investor_id, investment_id
        );
        self.apply(investor_id, investment_id, market_value, payout_amount)
            .await?;
        Ok(payout_amount)
    }
}
