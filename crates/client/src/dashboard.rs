//! Dashboard display state and the actions that drive it.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;
use treem_core::investments::Investment;
use treem_core::investors::InvestorSummary;
use treem_core::payouts::DEFAULT_PAYOUT_RATE;

use crate::api::{DashboardApi, DashboardApiError};

/// The two user-selectable sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    RoiPercent,
    NextDistributionDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    /// Either of the two fan-out reads failed; the caller retries with a
    /// full reload.
    #[error("Failed to load dashboard data")]
    Load(#[source] DashboardApiError),

    /// The payout call failed; displayed data is left unrefreshed.
    #[error("Error processing payout")]
    Payout(#[source] DashboardApiError),

    /// A payout for this investment is still outstanding.
    #[error("A payout is already in flight for investment {0}")]
    PayoutPending(String),

    /// The triggering row is not part of the displayed investments.
    #[error("No displayed investment with id {0}")]
    UnknownInvestment(String),
}

/// Held display state: one investor's summary and positions, plus the sort
/// selection and the in-flight payout guard.
///
/// The investor id is carried explicitly in place of an authenticated
/// session; no real auth integration exists.
pub struct Dashboard {
    api: Arc<dyn DashboardApi>,
    investor_id: String,
    summary: Option<InvestorSummary>,
    investments: Vec<Investment>,
    sort_field: SortField,
    sort_direction: SortDirection,
    pending_payout: Option<String>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn DashboardApi>, investor_id: &str) -> Self {
        Self {
            api,
            investor_id: investor_id.to_string(),
            summary: None,
            investments: Vec::new(),
            sort_field: SortField::RoiPercent,
            sort_direction: SortDirection::Desc,
            pending_payout: None,
        }
    }

    pub fn summary(&self) -> Option<&InvestorSummary> {
        self.summary.as_ref()
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn payout_pending(&self, investment_id: &str) -> bool {
        self.pending_payout.as_deref() == Some(investment_id)
    }

    /// Fans out both reads concurrently and stores the joined result. On any
    /// failure the held state is left as it was.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let (summary, investments) = tokio::try_join!(
            self.api.get_investor_summary(&self.investor_id),
            self.api.get_investments(&self.investor_id),
        )
        .map_err(DashboardError::Load)?;
        debug!(
            "Loaded summary and {} investments for {}",
            investments.len(),
            self.investor_id
        );
        self.summary = Some(summary);
        self.investments = investments;
        Ok(())
    }

    /// Selecting the current field flips direction; selecting the other
    /// field switches to it and resets direction to descending. Never
    /// refetches.
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
    }

    /// Pure, non-mutating transform over the held rows. Stable with respect
    /// to equal keys.
    pub fn sorted_investments(&self) -> Vec<Investment> {
        let mut rows = self.investments.clone();
        rows.sort_by(|a, b| {
            let ordering = match self.sort_field {
                SortField::RoiPercent => a
                    .roi_percent
                    .partial_cmp(&b.roi_percent)
                    .unwrap_or(Ordering::Equal),
                SortField::NextDistributionDate => {
                    a.next_distribution_date.cmp(&b.next_distribution_date)
                }
            };
            match self.sort_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        rows
    }

    /// Computes the payout as 5% of the currently displayed (possibly
    /// stale) market value, invokes the backend, then refetches both reads.
    /// Returns the amount that was submitted.
    ///
    /// While the call is outstanding the row's trigger is held pending, so
    /// a duplicate submission for the same row is rejected; other rows are
    /// not blocked.
    pub async fn trigger_payout(&mut self, investment_id: &str) -> Result<f64, DashboardError> {
        if self.payout_pending(investment_id) {
            return Err(DashboardError::PayoutPending(investment_id.to_string()));
        }
        let market_value = self
            .investments
            .iter()
            .find(|i| i.id == investment_id)
            .map(|i| i.market_value)
            .ok_or_else(|| DashboardError::UnknownInvestment(investment_id.to_string()))?;
        let payout_amount = market_value * DEFAULT_PAYOUT_RATE;

        self.pending_payout = Some(investment_id.to_string());
        let result = self
            .api
            .simulate_payout(&self.investor_id, investment_id, payout_amount)
            .await;
        self.pending_payout = None;
        result.map_err(DashboardError::Payout)?;

        // Refetch both reads regardless of what the payout made visible.
        self.load().await?;
        Ok(payout_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockApi {
        summary: Mutex<Option<InvestorSummary>>,
        investments: Mutex<Vec<Investment>>,
        fail_summary: Mutex<bool>,
        fail_payout: Mutex<bool>,
        payout_calls: Mutex<Vec<(String, String, f64)>>,
    }

    impl MockApi {
        fn with_data(summary: InvestorSummary, investments: Vec<Investment>) -> Self {
            Self {
                summary: Mutex::new(Some(summary)),
                investments: Mutex::new(investments),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl DashboardApi for MockApi {
        async fn get_investor_summary(
            &self,
            _investor_id: &str,
        ) -> Result<InvestorSummary, DashboardApiError> {
            if *self.fail_summary.lock().unwrap() {
                return Err(DashboardApiError::Api {
                    status: 500,
                    message: "Error fetching investor summary".to_string(),
                });
            }
            Ok(self.summary.lock().unwrap().clone().unwrap())
        }

        async fn get_investments(
            &self,
            _investor_id: &str,
        ) -> Result<Vec<Investment>, DashboardApiError> {
            Ok(self.investments.lock().unwrap().clone())
        }

        async fn simulate_payout(
            &self,
            investor_id: &str,
            investment_id: &str,
            payout_amount: f64,
        ) -> Result<(), DashboardApiError> {
            if *self.fail_payout.lock().unwrap() {
                return Err(DashboardApiError::Api {
                    status: 500,
                    message: "Error simulating payout".to_string(),
                });
            }
            self.payout_calls.lock().unwrap().push((
                investor_id.to_string(),
                investment_id.to_string(),
                payout_amount,
            ));
            // Mirror the backend's effect on the displayed rows.
            if let Some(row) = self
                .investments
                .lock()
                .unwrap()
                .iter_mut()
                .find(|i| i.id == investment_id)
            {
                row.market_value -= payout_amount;
            }
            if let Some(summary) = self.summary.lock().unwrap().as_mut() {
                summary.distributions_received += payout_amount;
                summary.portfolio_value -= payout_amount;
            }
            Ok(())
        }
    }

    fn summary() -> InvestorSummary {
        InvestorSummary {
            investor_id: "inv-1".to_string(),
            total_invested_amount: 250_000.0,
            portfolio_value: 1000.0,
            distributions_received: 100.0,
            outstanding_commitments: 0.0,
        }
    }

    fn investment(id: &str, roi: f64, date: &str, market_value: f64) -> Investment {
        Investment {
            id: id.to_string(),
            investor_id: "inv-1".to_string(),
            project_name: format!("Project {}", id),
            token_class: "Class A".to_string(),
            shares_owned: 100,
            market_value,
            roi_percent: roi,
            next_distribution_date: date.parse::<NaiveDate>().unwrap(),
        }
    }

    async fn loaded_dashboard(api: Arc<MockApi>) -> Dashboard {
        let mut dashboard = Dashboard::new(api, "inv-1");
        dashboard.load().await.unwrap();
        dashboard
    }

    #[tokio::test]
    async fn load_holds_both_results() {
        let api = Arc::new(MockApi::with_data(
            summary(),
            vec![investment("a", 5.0, "2026-01-15", 500.0)],
        ));
        let dashboard = loaded_dashboard(api).await;

        assert_eq!(dashboard.summary().unwrap().portfolio_value, 1000.0);
        assert_eq!(dashboard.sorted_investments().len(), 1);
    }

    #[tokio::test]
    async fn failed_read_leaves_state_unchanged() {
        let api = Arc::new(MockApi::with_data(summary(), Vec::new()));
        *api.fail_summary.lock().unwrap() = true;
        let mut dashboard = Dashboard::new(api, "inv-1");

        let result = dashboard.load().await;

        assert!(matches!(result, Err(DashboardError::Load(_))));
        assert!(dashboard.summary().is_none());
    }

    #[tokio::test]
    async fn empty_investments_is_a_valid_state() {
        let api = Arc::new(MockApi::with_data(summary(), Vec::new()));
        let dashboard = loaded_dashboard(api).await;

        assert!(dashboard.sorted_investments().is_empty());
        assert!(dashboard.summary().is_some());
    }

    #[tokio::test]
    async fn roi_ascending_is_the_reverse_of_descending() {
        let api = Arc::new(MockApi::with_data(
            summary(),
            vec![
                investment("a", 12.5, "2026-01-15", 500.0),
                investment("b", 3.0, "2026-02-15", 500.0),
                investment("c", 8.25, "2026-03-15", 500.0),
            ],
        ));
        let mut dashboard = loaded_dashboard(api).await;

        let descending: Vec<String> = dashboard
            .sorted_investments()
            .into_iter()
            .map(|i| i.id)
            .collect();
        dashboard.toggle_sort(SortField::RoiPercent);
        let ascending: Vec<String> = dashboard
            .sorted_investments()
            .into_iter()
            .map(|i| i.id)
            .collect();

        assert_eq!(descending, vec!["a", "c", "b"]);
        let mut reversed = descending.clone();
        reversed.reverse();
        assert_eq!(ascending, reversed);
    }

    #[tokio::test]
    async fn date_sort_is_stable_for_equal_dates() {
        let api = Arc::new(MockApi::with_data(
            summary(),
            vec![
                investment("a", 1.0, "2026-02-15", 500.0),
                investment("b", 2.0, "2026-01-15", 500.0),
                investment("c", 3.0, "2026-01-15", 500.0),
            ],
        ));
        let mut dashboard = loaded_dashboard(api).await;
        dashboard.toggle_sort(SortField::NextDistributionDate);
        dashboard.toggle_sort(SortField::NextDistributionDate);
        assert_eq!(dashboard.sort_direction(), SortDirection::Asc);

        let ids: Vec<String> = dashboard
            .sorted_investments()
            .into_iter()
            .map(|i| i.id)
            .collect();

        // b and c share a date and keep their fetched order.
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn toggling_same_field_flips_direction_new_field_resets_to_desc() {
        let api = Arc::new(MockApi::with_data(summary(), Vec::new()));
        let mut dashboard = loaded_dashboard(api).await;
        assert_eq!(dashboard.sort_field(), SortField::RoiPercent);
        assert_eq!(dashboard.sort_direction(), SortDirection::Desc);

        dashboard.toggle_sort(SortField::RoiPercent);
        assert_eq!(dashboard.sort_direction(), SortDirection::Asc);

        dashboard.toggle_sort(SortField::NextDistributionDate);
        assert_eq!(dashboard.sort_field(), SortField::NextDistributionDate);
        assert_eq!(dashboard.sort_direction(), SortDirection::Desc);
    }

    #[tokio::test]
    async fn payout_submits_five_percent_of_displayed_value_and_refreshes() {
        let api = Arc::new(MockApi::with_data(
            summary(),
            vec![investment("a", 5.0, "2026-01-15", 500.0)],
        ));
        let mut dashboard = loaded_dashboard(api.clone()).await;

        let amount = dashboard.trigger_payout("a").await.unwrap();

        assert_eq!(amount, 25.0);
        let calls = api.payout_calls.lock().unwrap().clone();
        assert_eq!(calls, vec![("inv-1".to_string(), "a".to_string(), 25.0)]);
        // State was refetched after the payout.
        assert_eq!(dashboard.sorted_investments()[0].market_value, 475.0);
        assert_eq!(dashboard.summary().unwrap().distributions_received, 125.0);
        assert!(!dashboard.payout_pending("a"));
    }

    #[tokio::test]
    async fn failed_payout_leaves_displayed_data_unrefreshed() {
        let api = Arc::new(MockApi::with_data(
            summary(),
            vec![investment("a", 5.0, "2026-01-15", 500.0)],
        ));
        *api.fail_payout.lock().unwrap() = true;
        let mut dashboard = loaded_dashboard(api).await;

        let result = dashboard.trigger_payout("a").await;

        assert!(matches!(result, Err(DashboardError::Payout(_))));
        assert_eq!(dashboard.sorted_investments()[0].market_value, 500.0);
        assert_eq!(dashboard.summary().unwrap().distributions_received, 100.0);
    }

    #[tokio::test]
    async fn payout_for_unknown_row_is_rejected() {
        let api = Arc::new(MockApi::with_data(summary(), Vec::new()));
        let mut dashboard = loaded_dashboard(api).await;

        let result = dashboard.trigger_payout("missing").await;

        assert!(matches!(result, Err(DashboardError::UnknownInvestment(_))));
    }
}
