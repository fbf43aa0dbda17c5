//! Treem Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the investor dashboard.
//! It is store-agnostic and defines repository traits that are implemented
//! by the `store-supabase` crate.

pub mod errors;
pub mod investments;
pub mod investors;
pub mod payouts;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
