use crate::app_config::{AppConfig, Environment, API_KEY_PLACEHOLDER};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BRANDAI_ENV", "development"))?;
    let bind_addr = parse_addr("BRANDAI_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("BRANDAI_LOG_LEVEL", "info");

    let openai_api_key = normalize_api_key(lookup("OPENAI_API_KEY").ok());
    let openai_base_url = or_default("OPENAI_BASE_URL", "https://api.openai.com/v1")
        .trim_end_matches('/')
        .to_string();
    let openai_model = or_default("OPENAI_MODEL", "gpt-3.5-turbo");

    let temperature_raw = or_default("OPENAI_TEMPERATURE", "0.9");
    let openai_temperature = temperature_raw
        .parse::<f32>()
        .map_err(|e| invalid("OPENAI_TEMPERATURE", e.to_string()))?;
    if !(0.0..=2.0).contains(&openai_temperature) {
        return Err(invalid(
            "OPENAI_TEMPERATURE",
            format!("{temperature_raw} is outside 0.0..=2.0"),
        ));
    }

    let openai_max_tokens = parse_u32("OPENAI_MAX_TOKENS", "2000")?;
    let openai_timeout_secs = parse_u64("OPENAI_TIMEOUT_SECS", "30")?;
    if openai_timeout_secs == 0 {
        return Err(invalid(
            "OPENAI_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        openai_api_key,
        openai_base_url,
        openai_model,
        openai_temperature,
        openai_max_tokens,
        openai_timeout_secs,
    })
}

/// Blank keys and the sample placeholder disable the remote backend.
fn normalize_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER)
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BRANDAI_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
