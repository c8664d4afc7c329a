//! # pmhub-auth
//!
//! Session helpers over the hosted auth/session provider.
//!
//! - [`SessionProvider`] is the seam to the provider; it owns session state.
//! - [`HostedAuthProvider`] talks to a GoTrue-style auth API over `reqwest`
//!   and keeps the session in memory.
//! - [`SessionHelpers`] exposes current session, current user, and sign-out
//!   over one shared provider instance.
//!
//! The provider is built once by the application's composition root and
//! passed in; nothing here holds process-global state.

pub mod error;
pub mod helpers;
pub mod hosted;
pub mod provider;
pub mod session;
pub mod token;

pub use error::AuthError;
pub use helpers::SessionHelpers;
pub use hosted::HostedAuthProvider;
pub use provider::SessionProvider;
pub use session::{AuthSession, AuthUser};
