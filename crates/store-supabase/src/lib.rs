//! Supabase-backed storage for the Treem investor dashboard.
//!
//! Implements the `treem-core` repository traits against a Supabase-hosted
//! PostgREST endpoint: equality-filtered point/multi-row reads and
//! equality-filtered partial-field updates. No transaction, batch, or
//! multi-table atomic-write primitive is used.

pub mod investments;
pub mod investors;
pub mod rest;

pub use investments::InvestmentRepository;
pub use investors::InvestorRepository;
pub use rest::SupabaseRestClient;
