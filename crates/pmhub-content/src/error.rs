//! Content client error types.

use thiserror::Error;

/// Errors returned by [`crate::ContentClient`].
///
/// `Http` and `Decode` distinguish "the server answered with an error" from
/// "the server answered with something that is not the expected shape".
#[derive(Debug, Error)]
pub enum ContentError {
    /// Connection, timeout, or body-read failure. No status was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The content API returned a non-success status code.
    #[error("HTTP error ({status}): {message}")]
    Http {
        /// HTTP status code returned by the content API.
        status: u16,
        /// Response body, possibly empty.
        message: String,
        /// Parsed `Retry-After` for 429/503 responses. Informational only.
        retry_after_secs: Option<u64>,
    },

    /// The response body is not valid JSON, does not match the entity
    /// schema, or breaks an entity invariant.
    #[error("decode error: {0}")]
    Decode(String),

    /// The entity schemas failed to compile while building the client.
    #[error("schema setup failed: {0}")]
    Schema(#[from] pmhub_schema::SchemaError),
}

impl ContentError {
    /// HTTP status for [`ContentError::Http`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}
