use std::future::Future;

use crate::error::AuthError;
use crate::session::{AuthSession, AuthUser};

/// Seam to the hosted auth/session provider.
///
/// Implementations own the session state and serialize access to it; callers
/// share one instance behind an `Arc` (see [`crate::SessionHelpers`]).
pub trait SessionProvider: Send + Sync {
    /// Current session, or `None` when signed out. Errors only on provider failure.
    fn session(&self) -> impl Future<Output = Result<Option<AuthSession>, AuthError>> + Send;

    /// Current user, or `None` when signed out. Errors only on provider failure.
    fn user(&self) -> impl Future<Output = Result<Option<AuthUser>, AuthError>> + Send;

    /// Terminate the current session. Signing out while signed out succeeds.
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>> + Send;
}
