mod auth;
mod case_studies;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use case_studies::{CaseStudyCommands, CaseStudyListArgs};
