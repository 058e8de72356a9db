use dlp_contract::DlpClient;
use dlp_core::prelude::*;
use dlp_core::{Config, RewardLog, Rewarder, TokioPause};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "dlp_core=info,dlp_contract=info,dlp_app=info";

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine, the process environment is used as is
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env()?;
    info!("Config: {config:?}");

    // Log directory exists before any chain work
    let log = RewardLog::open(&config.log_path)?;

    let client = DlpClient::new(
        &config.rpc_url,
        config.private_key.as_slice(),
        config.chain_id,
        config.registry_address,
        config.pool_address,
    )
    .await?;

    let rewarder = Rewarder::new(&config, &client.registry, &client.pool, &TokioPause, log);
    let outcomes = rewarder.run().await.inspect_err(|e| error!("Rewarding run failed: {e:#}"))?;
    info!("Processed {} files", outcomes.len());

    Ok(())
}
