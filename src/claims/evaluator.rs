use crate::horizon::ClaimableBalance;
use chrono::{DateTime, Duration, Utc};

/// Remaining claim window for a balance. Never a negative duration; once
/// the deadline has passed the window is `Expired`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeLeft {
    Remaining(Duration),
    Expired,
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeLeft::Remaining(d) => {
                let secs = d.num_seconds();
                let days = secs / 86_400;
                let hours = (secs % 86_400) / 3_600;
                let mins = (secs % 3_600) / 60;
                let rem_secs = secs % 60;
                if days > 0 {
                    write!(f, "{}d {}h {}m {}s", days, hours, mins, rem_secs)
                } else {
                    write!(f, "{}h {}m {}s", hours, mins, rem_secs)
                }
            }
            TimeLeft::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// Eligibility verdict for a single claimable balance
#[derive(Debug, Clone)]
pub struct ClaimVerdict {
    pub amount: String,
    pub deadline: DateTime<Utc>,
    pub can_claim: bool,
    pub time_left: TimeLeft,
}

/// Evaluates claim eligibility for one configured wallet
pub struct ClaimEvaluator {
    wallet: String,
}

impl ClaimEvaluator {
    pub fn new(wallet: impl Into<String>) -> Self {
        Self {
            wallet: wallet.into(),
        }
    }

    /// Evaluate a balance against the current wall clock
    pub fn evaluate(&self, balance: &ClaimableBalance) -> Option<ClaimVerdict> {
        self.evaluate_at(balance, Utc::now())
    }

    /// Evaluate a balance against an explicit clock.
    ///
    /// Only the first claimant naming our wallet is inspected; later
    /// claimants with the same destination are never considered. Only the
    /// `not.rel_before` predicate shape produces a verdict — any other
    /// shape means the record is not applicable, which is distinct from
    /// an expired window.
    pub fn evaluate_at(
        &self,
        balance: &ClaimableBalance,
        now: DateTime<Utc>,
    ) -> Option<ClaimVerdict> {
        let claimant = balance
            .claimants
            .iter()
            .find(|c| c.destination == self.wallet)?;

        let max_wait_secs = claimant.predicate.not.as_ref()?.rel_before_secs()?;

        // A bound large enough to overflow the calendar cannot produce a
        // meaningful deadline; treat it as not applicable.
        let deadline = balance
            .created_at
            .checked_add_signed(Duration::seconds(max_wait_secs))?;
        let can_claim = now < deadline;
        let time_left = if can_claim {
            TimeLeft::Remaining(deadline - now)
        } else {
            TimeLeft::Expired
        };

        Some(ClaimVerdict {
            amount: balance.amount.clone(),
            deadline,
            can_claim,
            time_left,
        })
    }
}
