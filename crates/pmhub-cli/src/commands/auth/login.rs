use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    email: Option<String>,
    expires_at: Option<String>,
    access_token: String,
    refresh_token: Option<String>,
    note: &'static str,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !ctx.config.auth.is_configured() {
        anyhow::bail!("auth login: PMHUB_AUTH__URL and PMHUB_AUTH__ANON_KEY must be configured");
    }

    let password = args.resolve_password(std::io::stdin().lock())?;
    let session = ctx
        .provider()
        .sign_in_with_password(&args.email, &password)
        .await?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.user.id,
            email: session.user.email,
            expires_at: session.expires_at.map(|at| at.to_rfc3339()),
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            note: "set PMHUB_AUTH__ACCESS_TOKEN and PMHUB_AUTH__REFRESH_TOKEN to reuse this session",
        },
        flags.format,
    )
}
