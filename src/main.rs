use anyhow::{Context, Result};
use glucose_advisor::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<LevelFilter> {
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

/// Builds the log filter from the configured level, with `rust_log`
/// (the value of RUST_LOG, if set) layered on top. A malformed value in
/// either place is an error rather than being dropped.
fn build_env_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter> {
    let level = validate_log_level(configured)?;
    let builder = EnvFilter::builder().with_default_directive(level.into());

    match rust_log {
        Some(directives) => builder.parse(directives).with_context(|| {
            format!("Invalid {} value: '{}'", EnvFilter::DEFAULT_ENV, directives)
        }),
        None => Ok(builder.parse_lossy("")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration and the backend credential are required before anything else runs
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = config.server.logs.level.clone();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let filter = match build_env_filter(rust_log.as_deref(), &log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting glucose advisor with log level: {}", log_level);
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_accepted() {
        assert!(build_env_filter(None, "warn").is_ok());
        assert!(build_env_filter(None, "DEBUG").is_ok());
    }

    #[test]
    fn test_configured_level_rejected() {
        let err = build_env_filter(None, "chatty").unwrap_err();
        assert!(err.to_string().contains("Invalid log level: 'chatty'"));
    }

    #[test]
    fn test_rust_log_directives_accepted() {
        assert!(build_env_filter(Some("glucose_advisor=debug,tower_http=info"), "info").is_ok());
        assert!(build_env_filter(Some("trace"), "info").is_ok());
    }

    #[test]
    fn test_malformed_rust_log_rejected() {
        let err = build_env_filter(Some("tower_http=loud"), "info").unwrap_err();
        assert!(err.to_string().contains("Invalid RUST_LOG value: 'tower_http=loud'"));
    }

    #[test]
    fn test_bad_configured_level_fails_even_with_rust_log() {
        assert!(build_env_filter(Some("debug"), "verbose").is_err());
    }
}
