//! Payouts module - the simulated-distribution mutator.

mod payouts_service;
mod payouts_traits;


pub use payouts_service::{PayoutService, DEFAULT_PAYOUT_RATE};
pub use payouts_traits::PayoutServiceTrait;
