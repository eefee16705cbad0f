//! Horizon ledger connectivity
//!
//! This module provides:
//! - Typed wire model for the claimable_balances endpoint
//! - HTTP client with the soft-fail fetch boundary

mod client;
mod types;

pub use client::HorizonClient;
pub use types::{ClaimableBalance, ClaimableBalancesResponse, Claimant, Embedded, Predicate};
