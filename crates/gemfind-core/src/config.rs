use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_url = require("GEMFIND_FEED_URL")?;

    let log_level = or_default("GEMFIND_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("GEMFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GEMFIND_USER_AGENT", "gemfind/0.1 (venue-finder)");

    let result_cap = parse_usize("GEMFIND_RESULT_CAP", "6")?;
    if result_cap == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEMFIND_RESULT_CAP".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let score_threshold = parse_f64("GEMFIND_SCORE_THRESHOLD", "0.40")?;
    if !(0.0..=1.0).contains(&score_threshold) {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEMFIND_SCORE_THRESHOLD".to_string(),
            reason: format!("must be within [0, 1], got {score_threshold}"),
        });
    }

    let url_debounce_ms = parse_u64("GEMFIND_URL_DEBOUNCE_MS", "150")?;
    let store_path = PathBuf::from(or_default("GEMFIND_STORE_PATH", "./gemfind-store.json"));

    Ok(AppConfig {
        feed_url,
        log_level,
        request_timeout_secs,
        user_agent,
        result_cap,
        score_threshold,
        url_debounce_ms,
        store_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
