use clap::{Args, Subcommand};
use pmhub_core::entities::CaseStudiesFilters;
use pmhub_core::enums::{LikesRange, Market, Objective};

/// Case-study commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CaseStudyCommands {
    /// List case studies, optionally filtered.
    List(CaseStudyListArgs),
    /// Fetch one case study by id.
    Get {
        /// Numeric case study id.
        id: u64,
    },
    /// Distinct categories and companies with counts.
    Facets,
}

#[derive(Clone, Debug, Default, Args)]
pub struct CaseStudyListArgs {
    /// Category to include (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Company to include (repeatable).
    #[arg(long = "company")]
    pub companies: Vec<String>,
    /// Market segment: B2B, B2C, B2B2C (repeatable).
    #[arg(long = "market")]
    pub markets: Vec<Market>,
    /// Likes bucket: 0-100, 101-500, 501-1000, 1000+.
    #[arg(long)]
    pub likes: Option<LikesRange>,
    /// Objective tag (repeatable), e.g. retention or user-experience.
    #[arg(long = "objective")]
    pub objectives: Vec<Objective>,
    /// Free-text search over title, company, category, and description.
    #[arg(long)]
    pub search: Option<String>,
}

impl CaseStudyListArgs {
    #[must_use]
    pub fn to_filters(&self) -> CaseStudiesFilters {
        CaseStudiesFilters {
            categories: self.categories.iter().cloned().collect(),
            companies: self.companies.iter().cloned().collect(),
            markets: self.markets.iter().copied().collect(),
            likes: self.likes,
            objectives: self.objectives.iter().copied().collect(),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}
