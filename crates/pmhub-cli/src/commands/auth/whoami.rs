use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(user) = ctx.session_helpers().current_user().await? else {
        anyhow::bail!("not signed in");
    };
    output(&user, flags.format)
}
