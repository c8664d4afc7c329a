//! # pmhub-content
//!
//! Typed, read-only client for the hosted content API that serves case
//! studies.
//!
//! Every response goes through three steps before it reaches the caller:
//! JSON parse, JSON Schema validation against the `pmhub-core` entity
//! schemas, and typed decoding plus invariant checks. A failure in any step
//! is a [`ContentError::Decode`]; a non-success status is a
//! [`ContentError::Http`]. Errors are returned as-is, never logged and
//! swallowed here.

mod case_studies;
mod error;
mod http;

pub use error::ContentError;

use std::sync::Arc;
use std::time::Duration;

use pmhub_schema::SchemaRegistry;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the content API. Cheap to clone; clones share the
/// connection pool and compiled schemas.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    schemas: Arc<SchemaRegistry>,
}

impl ContentClient {
    /// Create a client against `base_url` with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the HTTP client or the schemas fail to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client against the fixed production content API.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn production() -> Result<Self, ContentError> {
        Self::new(pmhub_core::DEFAULT_CONTENT_API)
    }

    /// Create a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pmhub/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            schemas: Arc::new(SchemaRegistry::new()?),
        })
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ContentClient::new("https://api.example.com/api:v1/").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com/api:v1");
        assert_eq!(
            client.endpoint("case_studies"),
            "https://api.example.com/api:v1/case_studies"
        );
    }

    #[test]
    fn production_uses_fixed_origin() {
        let client = ContentClient::production().unwrap();
        assert_eq!(client.base_url(), pmhub_core::DEFAULT_CONTENT_API);
    }

    #[test]
    fn endpoint_avoids_double_slash() {
        let client = ContentClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.endpoint("/case_studies/42"),
            "http://localhost:8080/case_studies/42"
        );
    }
}
