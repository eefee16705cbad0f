use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level HAL envelope returned by
/// `GET /accounts/{wallet}/claimable_balances`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimableBalancesResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedded {
    pub records: Vec<ClaimableBalance>,
}

/// A single claimable balance record
///
/// `amount` stays a decimal string as the ledger reports it; no numeric
/// conversion happens anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimableBalance {
    pub id: String,
    #[serde(default)]
    pub asset: Option<String>,
    pub amount: String,
    #[serde(default)]
    pub sponsor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub claimants: Vec<Claimant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claimant {
    pub destination: String,
    pub predicate: Predicate,
}

/// Claim predicate as Horizon encodes it: an object carrying exactly one
/// of these keys, nested for `and`/`or`/`not`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Predicate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconditional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<Predicate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<Predicate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Predicate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel_before: Option<String>,
}

impl Predicate {
    /// Seconds of a `rel_before` bound. Horizon encodes the count as a
    /// JSON string; a non-numeric string is treated as absent.
    pub fn rel_before_secs(&self) -> Option<i64> {
        self.rel_before.as_deref()?.parse().ok()
    }
}
