use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Core parsing logic, decoupled from the actual environment so tests drive
/// it with a plain `HashMap` lookup instead of `set_var`/`remove_var`.
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

    let env = parse_environment(&or_default("MULTIMARCA_ENV", "development"));
    let bind_addr = parse_addr("MULTIMARCA_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MULTIMARCA_LOG_LEVEL", "info");
    let image_host_url = lookup("MULTIMARCA_IMAGE_HOST_URL").ok();
    let http_timeout_secs = parse_u64("MULTIMARCA_HTTP_TIMEOUT_SECS", "12")?;
    let image_max_bytes = parse_u64("MULTIMARCA_IMAGE_MAX_BYTES", "5242880")?;
    let url_check_concurrency = parse_usize("MULTIMARCA_URL_CHECK_CONCURRENCY", "4")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        image_host_url,
        http_timeout_secs,
        image_max_bytes,
        url_check_concurrency,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn empty_environment_yields_full_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.image_host_url.is_none());
        assert_eq!(cfg.http_timeout_secs, 12);
        assert_eq!(cfg.image_max_bytes, 5_242_880);
        assert_eq!(cfg.url_check_concurrency, 4);
    }

    #[test]
    fn bind_addr_override() {
        let mut map = HashMap::new();
        map.insert("MULTIMARCA_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map = HashMap::new();
        map.insert("MULTIMARCA_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MULTIMARCA_BIND_ADDR"),
            "expected InvalidEnvVar(MULTIMARCA_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn image_host_url_is_picked_up() {
        let mut map = HashMap::new();
        map.insert("MULTIMARCA_IMAGE_HOST_URL", "https://cdn.example.com");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.image_host_url.as_deref(), Some("https://cdn.example.com"));
    }

    #[test]
    fn image_max_bytes_override() {
        let mut map = HashMap::new();
        map.insert("MULTIMARCA_IMAGE_MAX_BYTES", "1048576");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.image_max_bytes, 1_048_576);
    }

    #[test]
    fn invalid_image_max_bytes_is_rejected() {
        let mut map = HashMap::new();
        map.insert("MULTIMARCA_IMAGE_MAX_BYTES", "five-megabytes");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MULTIMARCA_IMAGE_MAX_BYTES"),
            "expected InvalidEnvVar(MULTIMARCA_IMAGE_MAX_BYTES), got: {result:?}"
        );
    }

    #[test]
    fn invalid_url_check_concurrency_is_rejected() {
        let mut map = HashMap::new();
        map.insert("MULTIMARCA_URL_CHECK_CONCURRENCY", "-2");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MULTIMARCA_URL_CHECK_CONCURRENCY"),
            "expected InvalidEnvVar(MULTIMARCA_URL_CHECK_CONCURRENCY), got: {result:?}"
        );
    }
}
