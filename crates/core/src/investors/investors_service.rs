use log::debug;
use std::sync::Arc;

use super::investors_model::InvestorSummary;
use super::investors_traits::{InvestorRepositoryTrait, InvestorServiceTrait};
use crate::errors::Result;

/// Read-only service for investor summaries.
pub struct InvestorService {
    repository: Arc<dyn InvestorRepositoryTrait>,
}

impl InvestorService {
    pub fn new(repository: Arc<dyn InvestorRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvestorServiceTrait for InvestorService {
    /// Returns the stored summary row unmodified.
    async fn get_investor_summary(&self, investor_id: &str) -> Result<InvestorSummary> {
        debug!("Fetching investor summary for {}", investor_id);
        self.repository.get_summary(investor_id).await
    }
}
