//! Entity structs for the content API and client-side filtering.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and boundary validation.

mod book;
mod case_study;
mod filters;

pub use book::{Book, sort_by_rating};
pub use case_study::CaseStudy;
pub use filters::{CaseStudiesFilters, CaseStudyFacets, FacetCount};
