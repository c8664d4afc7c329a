//! GoTrue-style hosted auth provider over HTTP.
//!
//! Endpoints (relative to the configured auth URL):
//! - `POST /token?grant_type=password` sign in
//! - `POST /token?grant_type=refresh_token` refresh
//! - `GET /user` current user
//! - `POST /logout` revoke the session
//!
//! Every request carries the `apikey` header; authenticated ones also carry
//! `Authorization: Bearer <access_token>`. Session state is held in memory
//! only and is serialized by an async `RwLock`.

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::AuthError;
use crate::provider::SessionProvider;
use crate::session::{AuthSession, AuthUser};
use crate::token::decode_expiry;

/// Refresh this many seconds before the access token actually expires.
const EXPIRY_BUFFER_SECS: i64 = 30;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    refresh_token: Option<String>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self) -> AuthSession {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .or_else(|| {
                self.expires_in
                    .map(|secs| Utc::now() + TimeDelta::seconds(secs))
            })
            .or_else(|| decode_expiry(&self.access_token).ok());
        AuthSession {
            token_type: self.token_type.unwrap_or_else(|| "bearer".into()),
            access_token: self.access_token,
            refresh_token: self.refresh_token.filter(|t| !t.is_empty()),
            expires_at,
            user: self.user,
        }
    }
}

/// Hosted auth provider client holding the process's session state.
pub struct HostedAuthProvider {
    http: reqwest::Client,
    auth_url: String,
    api_key: String,
    state: RwLock<Option<AuthSession>>,
}

impl std::fmt::Debug for HostedAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedAuthProvider")
            .field("auth_url", &self.auth_url)
            .finish_non_exhaustive()
    }
}

impl HostedAuthProvider {
    /// Create a provider client. An empty `auth_url` or `api_key` is accepted;
    /// calls that need the network then fail with [`AuthError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Provider`] if the HTTP client fails to build.
    pub fn new(auth_url: &str, api_key: &str) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pmhub/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            auth_url: auth_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            state: RwLock::new(None),
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.auth_url.is_empty() && !self.api_key.is_empty()
    }

    /// Sign in with email and password and adopt the resulting session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotConfigured`] without endpoint/key, or
    /// [`AuthError::Provider`] if the provider rejects the credentials.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let resp = self
            .request(reqwest::Method::POST, "token?grant_type=password")?
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let session = parse_token_response(resp).await?;
        *self.state.write().await = Some(session.clone());
        tracing::debug!(user_id = %session.user.id, "signed in");
        Ok(session)
    }

    /// Adopt an existing session from stored tokens.
    ///
    /// The access token's `exp` claim decides whether it is still usable. An
    /// expired token is exchanged via `refresh_token` when one is given.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidToken`] if the access token is not a JWT with `exp`
    /// - [`AuthError::TokenExpired`] if it expired and no refresh token is given
    /// - [`AuthError::Provider`] if the provider rejects the token
    pub async fn restore_session(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> Result<AuthSession, AuthError> {
        let refresh_token = refresh_token.filter(|t| !t.is_empty());
        let expires_at = decode_expiry(access_token)?;

        let session = if expires_at <= Utc::now() + TimeDelta::seconds(EXPIRY_BUFFER_SECS) {
            let refresh_token = refresh_token.ok_or(AuthError::TokenExpired)?;
            self.refresh(refresh_token).await?
        } else {
            AuthSession {
                access_token: access_token.to_string(),
                token_type: "bearer".into(),
                refresh_token: refresh_token.map(str::to_string),
                expires_at: Some(expires_at),
                user: self.fetch_user(access_token).await?,
            }
        };

        *self.state.write().await = Some(session.clone());
        Ok(session)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let resp = self
            .request(reqwest::Method::POST, "token?grant_type=refresh_token")?
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        let session = parse_token_response(resp).await?;
        tracing::debug!(user_id = %session.user.id, "session refreshed");
        Ok(session)
    }

    async fn fetch_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let resp = self
            .request(reqwest::Method::GET, "user")?
            .bearer_auth(access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(provider_error(resp).await);
        }
        resp.json().await.map_err(|e| AuthError::Provider {
            status: None,
            message: format!("parse user: {e}"),
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        if !self.is_configured() {
            return Err(AuthError::NotConfigured);
        }
        Ok(self
            .http
            .request(method, format!("{}/{path}", self.auth_url))
            .header("apikey", &self.api_key))
    }

    async fn current(&self) -> Option<AuthSession> {
        self.state.read().await.clone()
    }
}

impl SessionProvider for HostedAuthProvider {
    async fn session(&self) -> Result<Option<AuthSession>, AuthError> {
        let Some(session) = self.current().await else {
            return Ok(None);
        };
        if !session.is_near_expiry(EXPIRY_BUFFER_SECS) {
            return Ok(Some(session));
        }

        if let Some(refresh_token) = session.refresh_token.as_deref() {
            return match self.refresh(refresh_token).await {
                Ok(refreshed) => {
                    *self.state.write().await = Some(refreshed.clone());
                    Ok(Some(refreshed))
                }
                // 4xx: the refresh token itself was rejected; the session is dead.
                Err(AuthError::Provider {
                    status: Some(status),
                    message,
                }) if (400..500).contains(&status) => {
                    tracing::warn!(
                        user_id = %session.user.id,
                        status,
                        %message,
                        "refresh token rejected; treating as signed out",
                    );
                    *self.state.write().await = None;
                    Ok(None)
                }
                Err(error) => Err(error),
            };
        }

        tracing::warn!(
            user_id = %session.user.id,
            "session expired and no refresh token is held; treating as signed out",
        );
        *self.state.write().await = None;
        Ok(None)
    }

    async fn user(&self) -> Result<Option<AuthUser>, AuthError> {
        let Some(session) = self.session().await? else {
            return Ok(None);
        };
        self.fetch_user(&session.access_token).await.map(Some)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.current().await else {
            return Ok(());
        };

        let resp = self
            .request(reqwest::Method::POST, "logout")?
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        // 401/403/404: the session is already gone upstream.
        let status = resp.status();
        if status.is_success()
            || matches!(
                status,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
            )
        {
            *self.state.write().await = None;
            tracing::debug!(user_id = %session.user.id, "signed out");
            return Ok(());
        }

        Err(provider_error(resp).await)
    }
}

async fn parse_token_response(resp: reqwest::Response) -> Result<AuthSession, AuthError> {
    if !resp.status().is_success() {
        return Err(provider_error(resp).await);
    }
    let token: TokenResponse = resp.json().await.map_err(|e| AuthError::Provider {
        status: None,
        message: format!("parse token response: {e}"),
    })?;
    Ok(token.into_session())
}

/// Build a provider error from a non-success response, preferring the
/// provider's own message field over the raw body.
async fn provider_error(resp: reqwest::Response) -> AuthError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    AuthError::Provider {
        status: Some(status.as_u16()),
        message: format!("HTTP {}: {}", status.as_u16(), extract_message(&body)),
    }
}

fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}
