use std::path::PathBuf;

use clap::Args;
use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, CaseStudyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Browse case studies from the content API.
    CaseStudies {
        #[command(subcommand)]
        action: CaseStudyCommands,
    },
    /// Show a reading list from a local JSON file, best-rated first.
    Books(BooksArgs),
    /// Sign in, inspect, or end the current session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Print JSON Schemas for the content entities.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BooksArgs {
    /// Path to a JSON array of books.
    #[arg(long)]
    pub file: PathBuf,
    /// Only show books in this category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list the registered names.
    pub name: Option<String>,
}
