//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// Environment variable holding the upstream API credential.
pub const ENV_API_KEY: &str = "API_KEY";

/// Environment variable overriding the listen port.
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// PORT was set but did not parse as a TCP port.
    #[error("PORT must be a number between 1 and 65535, got '{0}'")]
    InvalidPort(String),
}

/// Load configuration from the process environment.
///
/// Only `API_KEY` and `PORT` are read; everything else comes from the
/// schema defaults. A missing or empty `API_KEY` is not a load error:
/// the service starts and rejects /api requests until the key is set.
pub fn load_from_env() -> Result<ServiceConfig, ConfigError> {
    from_vars(env::var(ENV_PORT).ok(), env::var(ENV_API_KEY).ok())
}

fn from_vars(port: Option<String>, api_key: Option<String>) -> Result<ServiceConfig, ConfigError> {
    let mut config = ServiceConfig::default();

    if let Some(raw) = port {
        let port: u16 = raw
            .trim()
            .parse()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| ConfigError::InvalidPort(raw.clone()))?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    config.upstream.api_key = api_key.filter(|key| !key.trim().is_empty());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = from_vars(None, None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert!(config.upstream.api_key.is_none());
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.rate_limit.window_secs, 900);
    }

    #[test]
    fn port_overrides_bind_address() {
        let config = from_vars(Some("8088".into()), None).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8088");
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(from_vars(Some("not-a-port".into()), None).is_err());
        assert!(from_vars(Some("0".into()), None).is_err());
        assert!(from_vars(Some("70000".into()), None).is_err());
    }

    #[test]
    fn blank_api_key_counts_as_unset() {
        let config = from_vars(None, Some("   ".into())).unwrap();
        assert!(config.upstream.api_key.is_none());

        let config = from_vars(None, Some("secret".into())).unwrap();
        assert_eq!(config.upstream.api_key.as_deref(), Some("secret"));
    }
}
