// src/lib.rs

pub mod claims;
pub mod config;
pub mod horizon;

// Re-export commonly used items
pub use claims::{ClaimEvaluator, ClaimVerdict, TimeLeft};
pub use horizon::HorizonClient;
