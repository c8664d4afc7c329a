use anyhow::Context;
use pmhub_core::entities::{CaseStudy, CaseStudyFacets};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CaseStudyCommands, CaseStudyListArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CaseStudyListResponse<'a> {
    case_studies: Vec<&'a CaseStudy>,
    matched: usize,
    total: usize,
}

/// Handle `pmhub case-studies <subcommand>`.
pub async fn handle(
    action: &CaseStudyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CaseStudyCommands::List(args) => handle_list(args, ctx, flags).await,
        CaseStudyCommands::Get { id } => handle_get(*id, ctx, flags).await,
        CaseStudyCommands::Facets => handle_facets(ctx, flags).await,
    }
}

async fn handle_list(
    args: &CaseStudyListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let studies = ctx
        .content
        .get_case_studies()
        .await
        .context("failed to fetch case studies")?;

    let filters = args.to_filters();
    let matched = filters.apply(&studies);
    let limit = flags.limit.unwrap_or(ctx.config.general.default_limit);
    tracing::debug!(total = studies.len(), matched = matched.len(), limit, "filtered case studies");

    let response = CaseStudyListResponse {
        matched: matched.len(),
        total: studies.len(),
        case_studies: matched.into_iter().take(limit as usize).collect(),
    };
    output(&response, flags.format)
}

async fn handle_get(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.content.get_case_study(id).await {
        Ok(study) => output(&study, flags.format),
        Err(error) if error.is_not_found() => {
            Err(anyhow::Error::new(error).context(format!("case study {id} not found")))
        }
        Err(error) => {
            Err(anyhow::Error::new(error).context(format!("failed to fetch case study {id}")))
        }
    }
}

async fn handle_facets(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let studies = ctx
        .content
        .get_case_studies()
        .await
        .context("failed to fetch case studies")?;
    output(&CaseStudyFacets::collect(&studies), flags.format)
}
