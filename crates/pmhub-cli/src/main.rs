use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    // Without a subscriber there is nowhere to log to; this is the one direct print.
    if let Err(error) = init_tracing(flags.quiet, flags.verbose) {
        eprintln!("pmhub error: {error:#}");
        std::process::exit(1);
    }

    // Every failure has been logged once by `commands::logged` by now.
    if run(cli, &flags).await.is_err() {
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli, flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    // Commands that need neither configuration nor remote services.
    match &cli.command {
        cli::Commands::Schema(args) => {
            return commands::logged("schema", commands::schema::handle(args, flags));
        }
        cli::Commands::Books(args) => {
            return commands::logged("books", commands::books::handle(args, flags));
        }
        _ => {}
    }

    let ctx = commands::logged("startup", init_context().await)?;
    commands::dispatch(cli.command, &ctx, flags).await
}

async fn init_context() -> anyhow::Result<context::AppContext> {
    let config =
        pmhub_config::PmhubConfig::load_with_dotenv().context("failed to load configuration")?;
    context::warn_unconfigured(&config);
    context::AppContext::init(config)
        .await
        .context("failed to initialize pmhub application context")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PMHUB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
