use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    /// Key the storefront signs customer access tokens with
    pub secret_key: String,
    /// Product catalog base URL
    pub catalog_url: String,
    /// Field validation service base URL
    pub validator_url: String,
    pub port: u16,
    /// Timeout for outbound requests; reqwest's default (none) when unset
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let secret_key = var("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;

        let port: u16 = match var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => 5002,
        };

        let http_timeout = match var("HTTP_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(value.parse().map_err(|_| {
                ConfigError::Invalid {
                    name: "HTTP_TIMEOUT_SECS",
                    value,
                }
            })?)),
            None => None,
        };

        Ok(Self {
            secret_key,
            catalog_url: var("FASTAPI_BASE_URL")
                .unwrap_or_else(|| "http://localhost:5001".to_string()),
            validator_url: var("VALIDATOR_API_URL")
                .unwrap_or_else(|| "http://localhost:5003".to_string()),
            port,
            http_timeout,
        })
    }
}
