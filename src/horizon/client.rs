use super::types::{ClaimableBalance, ClaimableBalancesResponse};
use eyre::{Result, WrapErr};
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct HorizonClient {
    client: Client,
    base_url: String,
}

impl HorizonClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .wrap_err("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Fetch the claimable balance records naming `wallet` as a claimant
    pub async fn claimable_balances(&self, wallet: &str) -> Result<Vec<ClaimableBalance>> {
        let url = format!("{}/accounts/{}/claimable_balances", self.base_url, wallet);

        tracing::debug!("Fetching claimable balances: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err("Failed to send claimable balances request")?;

        if !response.status().is_success() {
            eyre::bail!(
                "Claimable balances request failed: HTTP {}",
                response.status()
            );
        }

        let body: ClaimableBalancesResponse = response
            .json()
            .await
            .wrap_err("Failed to parse claimable balances response")?;

        tracing::info!(
            "Received {} claimable balance records for {}",
            body.embedded.records.len(),
            wallet
        );

        Ok(body.embedded.records)
    }

    /// Fetch boundary with the soft-fail contract: any failure (network,
    /// HTTP status, malformed body) is logged and collapsed into an empty
    /// record list.
    pub async fn fetch_or_empty(&self, wallet: &str) -> Vec<ClaimableBalance> {
        match self.claimable_balances(wallet).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(?e, "Claimable balances fetch failed");
                Vec::new()
            }
        }
    }
}
