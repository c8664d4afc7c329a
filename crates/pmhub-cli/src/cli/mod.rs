use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pmhub` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pmhub",
    version,
    about = "PMHub - case studies and session tools for the product-management content site"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
