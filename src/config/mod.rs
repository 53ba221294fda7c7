mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration file and resolves the backend credential from the
/// process environment. Fails if no credential is available.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").ok();
    let mut config = read_config(config_path.as_deref()).await?;
    apply_credential(&mut config, |name| env::var(name).ok())?;
    Ok(config)
}

/// Reads `path` if given. Without a path, `config.yaml` is used when present
/// and built-in defaults otherwise.
pub async fn read_config(path: Option<&str>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            if !tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
                debug!("No configuration file found, using defaults");
                return Ok(Config::default());
            }
            DEFAULT_CONFIG_PATH
        }
    };

    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// The environment variable named by `llm.api_key_env` wins over the file.
pub fn apply_credential<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(&config.llm.api_key_env).filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = key;
    }

    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "{} environment variable is missing",
            config.llm.api_key_env
        )));
    }

    Ok(())
}
