use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use pmhub_auth::{HostedAuthProvider, SessionHelpers};
use pmhub_config::PmhubConfig;
use pmhub_content::ContentClient;

/// Shared application resources initialized once at startup.
///
/// Holds the single auth provider instance for the process; every
/// [`SessionHelpers`] handed out wraps the same `Arc`.
pub struct AppContext {
    pub config: PmhubConfig,
    pub content: ContentClient,
    session: SessionHelpers<HostedAuthProvider>,
}

impl AppContext {
    /// Build the content client and the auth provider from configuration, and
    /// restore a session from configured tokens when present.
    pub async fn init(config: PmhubConfig) -> anyhow::Result<Self> {
        let content = ContentClient::with_timeout(
            config.content.base_url.as_str(),
            Duration::from_secs(config.content.timeout_secs),
        )
        .context("failed to build content API client")?;

        let provider = HostedAuthProvider::new(&config.auth.url, &config.auth.anon_key)
            .context("failed to build auth provider client")?;
        let ctx = Self::from_parts(config, content, Arc::new(provider));
        ctx.restore_configured_session().await;
        Ok(ctx)
    }

    pub fn from_parts(
        config: PmhubConfig,
        content: ContentClient,
        provider: Arc<HostedAuthProvider>,
    ) -> Self {
        Self {
            config,
            content,
            session: SessionHelpers::new(provider),
        }
    }

    /// Session helpers over the process-wide provider.
    pub fn session_helpers(&self) -> SessionHelpers<HostedAuthProvider> {
        self.session.clone()
    }

    pub fn provider(&self) -> &Arc<HostedAuthProvider> {
        self.session.provider()
    }

    /// A stale or revoked stored token is not fatal; the process continues
    /// signed out.
    async fn restore_configured_session(&self) {
        let auth = &self.config.auth;
        if !auth.is_configured() || !auth.has_session_tokens() {
            tracing::debug!("no stored session tokens; starting signed out");
            return;
        }

        let refresh = Some(auth.refresh_token.as_str()).filter(|t| !t.is_empty());
        match self
            .provider()
            .restore_session(&auth.access_token, refresh)
            .await
        {
            Ok(session) => {
                tracing::debug!(user_id = %session.user.id, "restored stored session");
            }
            Err(error) => {
                tracing::warn!(%error, "failed to restore stored session; continuing signed out");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pmhub_config::PmhubConfig;

    use super::AppContext;

    fn context() -> AppContext {
        let config = PmhubConfig::default();
        let content = pmhub_content::ContentClient::new(config.content.base_url.as_str())
            .expect("content client should build");
        let provider = pmhub_auth::HostedAuthProvider::new("", "").expect("provider should build");
        AppContext::from_parts(config, content, Arc::new(provider))
    }

    #[test]
    fn session_helpers_share_one_provider() {
        let ctx = context();
        let first = ctx.session_helpers();
        let second = ctx.session_helpers();
        assert!(Arc::ptr_eq(first.provider(), second.provider()));
        assert!(Arc::ptr_eq(first.provider(), ctx.provider()));
    }

    #[tokio::test]
    async fn unconfigured_provider_starts_signed_out() {
        let ctx = context();
        ctx.restore_configured_session().await;
        let session = ctx
            .session_helpers()
            .current_session()
            .await
            .expect("no session is not an error");
        assert!(session.is_none());
    }
}
