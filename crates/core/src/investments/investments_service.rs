use log::debug;
use std::sync::Arc;

use super::investments_model::Investment;
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::Result;

/// Read-only service for investment listings.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    /// Returns every investment row whose `investor_id` matches, in store
    /// order. An investor with no positions yields an empty list, not an
    /// error.
    async fn get_investments(&self, investor_id: &str) -> Result<Vec<Investment>> {
        debug!("Fetching investments for {}", investor_id);
        self.repository.list_by_investor(investor_id).await
    }
}
