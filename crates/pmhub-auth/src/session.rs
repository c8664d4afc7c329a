use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// User record as returned by the auth provider. Never constructed locally
/// except from a provider response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Map<String, serde_json::Value>,
}

/// An authenticated session held by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: Option<String>,
    /// `None` when the provider gave no expiry; such sessions never expire locally.
    pub expires_at: Option<DateTime<Utc>>,
    pub user: AuthUser,
}

impl AuthSession {
    /// Check if the session is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            expires_at <= Utc::now() + TimeDelta::seconds(buffer_secs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_session(expires_at: Option<DateTime<Utc>>) -> AuthSession {
        AuthSession {
            access_token: "test.jwt.token".into(),
            token_type: "bearer".into(),
            refresh_token: None,
            expires_at,
            user: AuthUser {
                id: "8d0fd2b3-9ca7-4d9e-a95f-9e13dded323e".into(),
                email: Some("pm@example.com".into()),
                role: Some("authenticated".into()),
                created_at: None,
                user_metadata: serde_json::Map::new(),
            },
        }
    }

    #[test]
    fn is_near_expiry_false_when_far_future() {
        let session = make_session(Some(Utc::now() + TimeDelta::hours(1)));
        assert!(!session.is_near_expiry(60));
    }

    #[test]
    fn is_near_expiry_true_when_past() {
        let session = make_session(Some(Utc::now() - TimeDelta::seconds(10)));
        assert!(session.is_near_expiry(60));
    }

    #[test]
    fn is_near_expiry_true_within_buffer() {
        let session = make_session(Some(Utc::now() + TimeDelta::seconds(30)));
        assert!(session.is_near_expiry(60));
    }

    #[test]
    fn no_expiry_never_expires() {
        assert!(!make_session(None).is_near_expiry(60));
    }

    #[test]
    fn user_tolerates_sparse_payload() {
        let user: AuthUser = serde_json::from_str(r#"{"id":"u-1","aud":"authenticated"}"#).unwrap();
        assert_eq!(user.id, "u-1");
        assert!(user.email.is_none());
        assert!(user.user_metadata.is_empty());
    }
}
