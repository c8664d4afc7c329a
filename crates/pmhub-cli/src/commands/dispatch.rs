use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::CaseStudies { action } => logged(
            "case-studies",
            commands::case_studies::handle(&action, ctx, flags).await,
        ),
        Commands::Auth { action } => {
            logged("auth", commands::auth::handle(&action, ctx, flags).await)
        }
        Commands::Schema(_) | Commands::Books(_) => {
            unreachable!("schema/books are pre-dispatched in main")
        }
    }
}

/// Log a failed command once, then pass the error on unchanged.
pub fn logged<T>(operation: &'static str, result: anyhow::Result<T>) -> anyhow::Result<T> {
    result.inspect_err(|error| {
        tracing::error!(operation, error = %format!("{error:#}"), "command failed");
    })
}
