//! Environment configuration for the mock validator

use std::time::Duration;

use anyhow::{Context, Result};

use crate::server::ValidatorSettings;

pub struct MockConfig {
    pub port: u16,
    pub settings: ValidatorSettings,
}

impl MockConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port: u16 = match var("MOCK_VALIDATOR_PORT") {
            Some(p) => p
                .parse()
                .context("MOCK_VALIDATOR_PORT must be a port number")?,
            None => 5003,
        };
        let delay_ms: u64 = match var("MOCK_VALIDATOR_DELAY_MS") {
            Some(d) => d
                .parse()
                .context("MOCK_VALIDATOR_DELAY_MS must be a number of milliseconds")?,
            None => 50,
        };

        Ok(Self {
            port,
            settings: ValidatorSettings {
                delay: Duration::from_millis(delay_ms),
            },
        })
    }
}
