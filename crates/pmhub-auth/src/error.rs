use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth provider not configured: set PMHUB_AUTH__URL and PMHUB_AUTH__ANON_KEY")]
    NotConfigured,

    #[error("session expired: sign in again with `pmhub auth login`")]
    TokenExpired,

    #[error("invalid session token: {0}")]
    InvalidToken(String),

    /// Any failure reported by, or on the way to, the auth provider.
    #[error("auth provider error: {message}")]
    Provider {
        /// HTTP status, when the provider answered.
        status: Option<u16>,
        message: String,
    },
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Provider {
            status: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
        }
    }
}
