//! # pmhub-config
//!
//! Layered configuration loading for PMHub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PMHUB_*` prefix, `__` as separator)
//! 2. Project-level `.pmhub/config.toml`
//! 3. User-level `~/.config/pmhub/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PMHUB_CONTENT__BASE_URL` -> `content.base_url`,
//! `PMHUB_AUTH__ANON_KEY` -> `auth.anon_key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pmhub_config::PmhubConfig;
//!
//! let config = PmhubConfig::load_with_dotenv().expect("config");
//! println!("content API: {}", config.content.base_url);
//! if config.auth.is_configured() {
//!     println!("auth provider: {}", config.auth.url);
//! }
//! ```

mod auth;
mod content;
mod error;
mod general;

pub use auth::AuthConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "PMHUB_";
const PROJECT_CONFIG: &str = ".pmhub/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PmhubConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PmhubConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse, or
    /// [`ConfigError::InvalidValue`] if the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.content.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pmhub").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PmhubConfig::default();
        assert_eq!(config.content.base_url, pmhub_core::DEFAULT_CONTENT_API);
        assert!(!config.auth.is_configured());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_defaults_extract() {
        let figment = Figment::from(Serialized::defaults(PmhubConfig::default()));
        let config = PmhubConfig::from_figment(&figment).expect("defaults are valid");
        assert_eq!(config.content.timeout_secs, 10);
    }
}
