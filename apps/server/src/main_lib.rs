use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use treem_core::investments::{InvestmentService, InvestmentServiceTrait};
use treem_core::investors::{InvestorService, InvestorServiceTrait};
use treem_core::payouts::{PayoutService, PayoutServiceTrait};
use treem_store_supabase::{InvestmentRepository, InvestorRepository, SupabaseRestClient};

use crate::config::Config;

pub struct AppState {
    pub investor_service: Arc<dyn InvestorServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub payout_service: Arc<dyn PayoutServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TREEM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires the store client, repositories, and services into shared state.
/// No cross-request mutable state lives here; the external store is the
/// only shared mutable resource.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let rest = SupabaseRestClient::new(&config.store_url, &config.store_api_key);
    tracing::info!("Using data store at {}", config.store_url);

    let investor_repository = Arc::new(InvestorRepository::new(rest.clone()));
    let investment_repository = Arc::new(InvestmentRepository::new(rest));

    let investor_service = Arc::new(InvestorService::new(investor_repository.clone()));
    let investment_service = Arc::new(InvestmentService::new(investment_repository.clone()));
    let payout_service = Arc::new(PayoutService::new(
        investment_repository,
        investor_repository,
    ));

    Arc::new(AppState {
        investor_service,
        investment_service,
        payout_service,
    })
}
