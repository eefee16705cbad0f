use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    pub api_url: String,
    pub wallet: String,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            wallet: String::new(),
            http: HttpConfig::default(),
        }
    }
}

impl WatcherConfig {
    pub async fn load_from_file(path: &Path) -> eyre::Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment variable overrides. `PI_API_URL` and
    /// `WALLET_ADDRESS` take precedence over file values;
    /// `CLAIMWATCH_TIMEOUT_SECS` overrides the HTTP timeout. Absent
    /// variables leave the config untouched.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("PI_API_URL") {
            self.api_url = url;
        }
        if let Ok(wallet) = std::env::var("WALLET_ADDRESS") {
            self.wallet = wallet;
        }
        if let Some(timeout) = std::env::var("CLAIMWATCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.http.timeout_secs = timeout;
        }
        self
    }
}
