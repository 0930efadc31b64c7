use anyhow::Result;
use credit_risk_api::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration comes first so the log level can be read from it
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    // Accepts plain levels as well as directives such as `credit_risk_api=debug`
    let env_filter = match EnvFilter::try_new(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Invalid log filter '{}': {}", log_level, e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!(
        "Starting credit risk prediction server with log level: {}",
        log_level
    );
    info!(
        "Model artifact: {} (required: {})",
        config.model.path, config.model.required
    );

    server::run(config).await?;

    Ok(())
}
