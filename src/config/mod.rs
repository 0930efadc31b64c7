mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    load_with(
        env::var("CONFIG_PATH").ok(),
        DEFAULT_CONFIG_PATH,
        env::var("MODEL_PATH").ok(),
    )
    .await
}

/// Resolves the config file and applies the model path override.
///
/// An explicit `config_path` must exist. Without one, a missing file at
/// `default_path` yields the default configuration.
pub async fn load_with(
    config_path: Option<String>,
    default_path: &str,
    model_path: Option<String>,
) -> Result<Config> {
    let mut config = match config_path {
        Some(config_path) => load_from(&config_path).await?,
        None => match load_from(default_path).await {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No configuration at {}, using defaults", default_path);
                Config::default()
            }
            Err(e) => return Err(e),
        },
    };

    if let Some(model_path) = model_path {
        config.model.path = model_path;
    }

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;

    if !(0.0..=1.0).contains(&config.response.threshold) {
        return Err(Error::config(format!(
            "response.threshold must be within [0, 1], got {}",
            config.response.threshold
        )));
    }

    Ok(config)
}
