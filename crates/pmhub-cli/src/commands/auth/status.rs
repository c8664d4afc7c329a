use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    expires_at: Option<String>,
    note: Option<String>,
}

impl AuthStatusResponse {
    fn signed_out(note: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            user_id: None,
            email: None,
            expires_at: None,
            note: Some(note.into()),
        }
    }
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = if ctx.config.auth.is_configured() {
        match ctx.session_helpers().current_session().await? {
            Some(session) => AuthStatusResponse {
                authenticated: true,
                user_id: Some(session.user.id),
                email: session.user.email,
                expires_at: session.expires_at.map(|at| at.to_rfc3339()),
                note: None,
            },
            None => AuthStatusResponse::signed_out("no active session"),
        }
    } else {
        AuthStatusResponse::signed_out("PMHUB_AUTH__URL / PMHUB_AUTH__ANON_KEY not configured")
    };

    output(&status, flags.format)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pmhub_auth::HostedAuthProvider;
    use pmhub_config::{AuthConfig, PmhubConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::handle;
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
        }
    }

    async fn context_for(server: &MockServer) -> AppContext {
        let auth_url = format!("{}/auth/v1", server.uri());
        let config = PmhubConfig {
            auth: AuthConfig {
                url: auth_url.clone(),
                anon_key: "anon".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let content = pmhub_content::ContentClient::new(config.content.base_url.as_str())
            .expect("content client should build");
        let provider = HostedAuthProvider::new(&auth_url, "anon").expect("provider should build");
        AppContext::from_parts(config, content, Arc::new(provider))
    }

    #[tokio::test]
    async fn provider_failure_is_an_error_not_a_signed_out_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "a.b.c",
                "expires_in": 5,
                "refresh_token": "r1",
                "user": { "id": "u-1" }
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"msg": "auth down"})))
            .mount(&server)
            .await;

        let ctx = context_for(&server).await;
        ctx.provider()
            .sign_in_with_password("pm@example.com", "pw")
            .await
            .expect("sign in");

        let err = handle(&ctx, &flags()).await.unwrap_err();
        assert!(format!("{err:#}").contains("auth down"), "{err:#}");
    }

    #[tokio::test]
    async fn no_session_reports_signed_out() {
        let server = MockServer::start().await;
        let ctx = context_for(&server).await;
        handle(&ctx, &flags()).await.expect("signed out is not an error");
    }
}
