//! Content API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    pmhub_core::DEFAULT_CONTENT_API.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Origin plus versioned path prefix of the content API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ContentConfig {
    /// Reject base URLs that are not `http(s)://` and zero timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "content.base_url".into(),
                reason: format!("'{url}' is not an http(s) URL"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "content.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
