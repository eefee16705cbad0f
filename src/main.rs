use clap::Parser;
use claimwatch::claims::ClaimEvaluator;
use claimwatch::config::WatcherConfig;
use claimwatch::horizon::HorizonClient;
use eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration directory
    #[arg(long, default_value = "./configs/dev")]
    config_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting claimwatch");

    // Load configuration
    let config_dir = PathBuf::from(&cli.config_path);
    let config_path = config_dir.join("claimwatch.json");

    let config = if config_path.exists() {
        WatcherConfig::load_from_file(&config_path)
            .await?
            .with_env_overrides()
    } else {
        tracing::warn!("claimwatch.json not found, using defaults");
        WatcherConfig::default().with_env_overrides()
    };

    tracing::info!(wallet = %config.wallet, api_url = %config.api_url, timeout_secs = config.http.timeout_secs, "Config loaded");

    let client = HorizonClient::new(config.api_url.clone(), config.http.timeout_secs)?;
    let evaluator = ClaimEvaluator::new(config.wallet.clone());

    println!("\nAnalyzing wallet: {}", config.wallet);

    let balances = client.fetch_or_empty(&config.wallet).await;

    if balances.is_empty() {
        println!("No claimable balances found.");
        return Ok(());
    }

    println!("Found {} claimable balances:", balances.len());

    for balance in &balances {
        match evaluator.evaluate(balance) {
            Some(verdict) => {
                println!("\nAmount: {}", verdict.amount);
                println!("Deadline: {}", verdict.deadline);
                println!(
                    "Can claim now: {}",
                    if verdict.can_claim { "YES" } else { "NO" }
                );
                println!("Time left: {}", verdict.time_left);
            }
            None => {
                tracing::debug!(id = %balance.id, "No applicable claim predicate for this wallet");
            }
        }
    }

    Ok(())
}
