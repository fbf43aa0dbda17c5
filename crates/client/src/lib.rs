//! Treem dashboard client - fetch orchestration, client-side sorting, and
//! the payout trigger.
//!
//! This crate is the consumer side of the backend API: it fans out the two
//! dashboard reads, holds the fetched state, sorts it without refetching,
//! and drives the simulate-payout endpoint. The backend is reached through
//! the [`DashboardApi`] trait so tests can substitute a double.

pub mod api;
pub mod dashboard;

pub use api::{DashboardApi, DashboardApiError, HttpDashboardApi};
pub use dashboard::{Dashboard, DashboardError, SortDirection, SortField};
