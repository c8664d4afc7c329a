//! Shared HTTP response helpers for the content client.
//!
//! Centralizes the status-code check (non-success → [`ContentError::Http`],
//! with `Retry-After` parsing on 429/503) and JSON body handling so
//! `case_studies` stays focused on request construction and entity mapping.

use crate::error::ContentError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body into
/// the error message; for 429 and 503 also parses `Retry-After` seconds.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ContentError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let retry_after_secs = if status.as_u16() == 429 || status.as_u16() == 503 {
        parse_retry_after(&resp)
    } else {
        None
    };
    Err(ContentError::Http {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
        retry_after_secs,
    })
}

/// Parse the `Retry-After` header as whole seconds.
fn parse_retry_after(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// Parse a response body as JSON. An empty body or a literal `null` yields `None`.
pub fn parse_body(body: &[u8]) -> Result<Option<serde_json::Value>, ContentError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ContentError::Decode(format!("response is not valid JSON: {e}")))?;
    Ok((!value.is_null()).then_some(value))
}
