use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns [`ConfigError`] if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns [`ConfigError`] if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation core is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("LEADCHECK_ENV", "development"));
    let bind_addr = parse_addr("LEADCHECK_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LEADCHECK_LOG_LEVEL", "info");

    let search_base_url = or_default("LEADCHECK_SEARCH_BASE_URL", "https://duckduckgo.com");
    let reddit_base_url = or_default("LEADCHECK_REDDIT_BASE_URL", "https://www.reddit.com");

    let scrape_timeout_secs = parse_u64("LEADCHECK_SCRAPE_TIMEOUT_SECS", "60")?;
    let request_timeout_secs = parse_u64("LEADCHECK_REQUEST_TIMEOUT_SECS", "15")?;
    let min_request_interval_ms = parse_u64("LEADCHECK_MIN_REQUEST_INTERVAL_MS", "2000")?;
    let max_retries = parse_u32("LEADCHECK_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("LEADCHECK_RETRY_BACKOFF_BASE_MS", "350")?;

    let analysis_ttl_secs = parse_u64("LEADCHECK_ANALYSIS_TTL_SECS", "86400")?;
    let sweep_interval_secs = parse_u64("LEADCHECK_SWEEP_INTERVAL_SECS", "60")?;

    let sendgrid_api_key = lookup("SENDGRID_API_KEY").ok().filter(|k| !k.is_empty());
    let sendgrid_from_email = or_default("SENDGRID_FROM_EMAIL", "no-reply@taggle.ai");
    let product_url = or_default("LEADCHECK_PRODUCT_URL", "https://taggle.ai");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        search_base_url,
        reddit_base_url,
        scrape_timeout_secs,
        request_timeout_secs,
        min_request_interval_ms,
        max_retries,
        retry_backoff_base_ms,
        analysis_ttl_secs,
        sweep_interval_secs,
        sendgrid_api_key,
        sendgrid_from_email,
        product_url,
    })
}

fn parse_environment(raw: &str) -> Environment {
    match raw.to_ascii_lowercase().as_str() {
        "production" | "prod" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &HashMap<&str, &str>) -> Result<AppConfig, ConfigError> {
        build_app_config(|key| {
            vars.get(key)
                .map(|v| (*v).to_string())
                .ok_or(std::env::VarError::NotPresent)
        })
    }

    #[test]
    fn defaults_apply_with_empty_env() {
        let config = from_map(&HashMap::new()).unwrap();
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.search_base_url, "https://duckduckgo.com");
        assert_eq!(config.scrape_timeout_secs, 60);
        assert_eq!(config.min_request_interval_ms, 2000);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_backoff_base_ms, 350);
        assert_eq!(config.analysis_ttl_secs, 86_400);
        assert_eq!(config.sweep_interval_secs, 60);
        assert!(config.sendgrid_api_key.is_none());
    }

    #[test]
    fn overrides_are_honored() {
        let vars = HashMap::from([
            ("LEADCHECK_ENV", "production"),
            ("LEADCHECK_BIND_ADDR", "127.0.0.1:8080"),
            ("LEADCHECK_MAX_RETRIES", "5"),
            ("SENDGRID_API_KEY", "sg-key"),
        ]);
        let config = from_map(&vars).unwrap();
        assert_eq!(config.env, Environment::Production);
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.sendgrid_api_key.as_deref(), Some("sg-key"));
    }

    #[test]
    fn empty_sendgrid_key_means_demo_mode() {
        let vars = HashMap::from([("SENDGRID_API_KEY", "")]);
        let config = from_map(&vars).unwrap();
        assert!(config.sendgrid_api_key.is_none());
    }

    #[test]
    fn invalid_number_is_rejected() {
        let vars = HashMap::from([("LEADCHECK_SCRAPE_TIMEOUT_SECS", "soon")]);
        let err = from_map(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { var, .. } if var == "LEADCHECK_SCRAPE_TIMEOUT_SECS"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let vars = HashMap::from([("SENDGRID_API_KEY", "sg-secret")]);
        let config = from_map(&vars).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sg-secret"));
        assert!(debug.contains("[redacted]"));
    }
}
