//! Claim eligibility evaluation

mod evaluator;

pub use evaluator::{ClaimEvaluator, ClaimVerdict, TimeLeft};
