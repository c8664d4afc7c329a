//! # pmhub-core
//!
//! Core types shared across the PMHub content and session crates:
//! - Entity structs for the content API (case studies, books) and the
//!   client-side case-study filter
//! - Closed enumerations (market segment, objective tags, likes buckets)
//! - Cross-cutting error types
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so that the
//! same definitions drive decoding and boundary validation.

pub mod entities;
pub mod enums;
pub mod errors;

pub use errors::CoreError;

/// Fixed origin and versioned path prefix of the hosted content API.
pub const DEFAULT_CONTENT_API: &str = "https://api.pmhub.app/api:v1";

/// Check the invariants of a decoded case-study collection.
///
/// Every element must pass [`entities::CaseStudy::validate`] and ids must be
/// unique within the collection.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the first offending case study.
pub fn validate_collection(items: &[entities::CaseStudy]) -> Result<(), CoreError> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "duplicate case study id '{}'",
                item.id
            )));
        }
    }
    Ok(())
}
