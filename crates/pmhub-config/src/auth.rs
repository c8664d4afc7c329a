//! Hosted auth provider configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Auth API root, e.g. `https://<project>.supabase.co/auth/v1`.
    #[serde(default)]
    pub url: String,

    /// Public (anon) API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,

    /// Access token of an existing session to restore on startup.
    #[serde(default)]
    pub access_token: String,

    /// Refresh token paired with `access_token`.
    #[serde(default)]
    pub refresh_token: String,
}

impl AuthConfig {
    /// Check if the provider endpoint and key are set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Whether a session can be restored from configured tokens.
    pub fn has_session_tokens(&self) -> bool {
        !self.access_token.is_empty()
    }
}
