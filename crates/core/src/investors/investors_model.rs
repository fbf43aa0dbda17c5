//! Investor domain models.

use serde::{Deserialize, Serialize};

/// Aggregate per-investor financial snapshot, one row per investor.
///
/// Field names match the stored columns; both read paths are pass-through,
/// so no wire-format renaming is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestorSummary {
    pub investor_id: String,
    pub total_invested_amount: f64,
    pub portfolio_value: f64,
    pub distributions_received: f64,
    pub outstanding_commitments: f64,
}

/// The two summary columns touched by a payout, read together and written
/// together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DistributionTotals {
    pub distributions_received: f64,
    pub portfolio_value: f64,
}
