use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// The only claim read from an access token.
#[derive(Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Read the `exp` claim of an access token. The signature is not checked;
/// the provider rejects forged tokens on the next call anyway.
///
/// # Errors
///
/// Returns [`AuthError::InvalidToken`] unless `jwt` is three dot-separated
/// segments whose middle one is base64url JSON with a numeric `exp`.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let segments: Vec<&str> = jwt.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(AuthError::InvalidToken(format!(
            "expected 3 token segments, found {}",
            segments.len()
        )));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::InvalidToken(format!("payload is not base64url: {e}")))?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::InvalidToken(format!("payload has no usable exp: {e}")))?;

    DateTime::from_timestamp(claim.exp, 0)
        .ok_or_else(|| AuthError::InvalidToken(format!("exp {} is out of range", claim.exp)))
}

#[cfg(test)]
pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
    [
        URL_SAFE_NO_PAD.encode(r#"{"typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u-1","role":"authenticated","exp":{exp}}}"#)),
        URL_SAFE_NO_PAD.encode("unsigned"),
    ]
    .join(".")
}
