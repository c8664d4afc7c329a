use std::sync::Arc;

use crate::error::AuthError;
use crate::provider::SessionProvider;
use crate::session::{AuthSession, AuthUser};

/// Thin session/user/sign-out helpers over a shared provider instance.
///
/// Clones share the same provider. Build the provider once at the
/// composition root and hand out clones of the helpers.
pub struct SessionHelpers<P> {
    provider: Arc<P>,
}

impl<P> Clone for SessionHelpers<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P> std::fmt::Debug for SessionHelpers<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHelpers")
            .field("provider", &Arc::as_ptr(&self.provider))
            .finish()
    }
}

impl<P: SessionProvider> SessionHelpers<P> {
    #[must_use]
    pub const fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// The shared provider instance.
    #[must_use]
    pub const fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`] unchanged.
    pub async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        self.provider.session().await
    }

    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`] unchanged.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        self.provider.user().await
    }

    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`] unchanged; its message carries
    /// the provider's own message.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await
    }
}
