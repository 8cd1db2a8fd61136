//! Configuration file structures for the Matchday engine.
//!
//! Configuration is a YAML file with environment-variable overrides under
//! the `MATCHDAY_` prefix (`__` separates sections).
//!
//! # Configuration File Format
//!
//! ```yaml
//! api:
//!   # Base URL of the companion data service
//!   url: "https://api.example.com"
//!   # Seconds between global trigger passes
//!   polling_interval: 300
//!
//! push:
//!   # Whether platform push permission was granted
//!   enabled: true
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export MATCHDAY_API__URL="https://api.example.com"
//! export MATCHDAY_PUSH__ENABLED="false"
//! ```

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration of the engine.
#[derive(Deserialize)]
pub struct Config {
    /// Companion data service configuration.
    pub api: Api,
    /// Platform push configuration.
    #[serde(default)]
    pub push: Push,
}

/// Companion data service configuration.
#[derive(Deserialize)]
pub struct Api {
    /// Base URL of the service.
    ///
    /// Should include the protocol (http/https) but not trailing slashes.
    pub url: String,

    /// Seconds between global trigger passes.
    #[serde(default = "default_polling_interval")]
    pub polling_interval: u64,
}

/// Platform push configuration.
#[derive(Deserialize, Default)]
pub struct Push {
    /// Whether the user granted platform notification permission. When
    /// false, push delivery silently downgrades to in-app only.
    #[serde(default)]
    pub enabled: bool,
}

fn default_polling_interval() -> u64 {
    300
}

impl Config {
    /// Loads the YAML configuration with environment overrides applied.
    pub fn load(path: &str) -> anyhow::Result<Config> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("MATCHDAY_").split("__"))
            .extract()
            .with_context(|| format!("failed to load configuration from {}", path))
    }
}
