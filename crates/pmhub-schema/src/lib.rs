//! # pmhub-schema
//!
//! JSON Schema generation, validation, and registry for PMHub content.
//!
//! Entity types are defined in `pmhub-core` with `#[derive(JsonSchema)]`.
//! This crate compiles those schemas once and validates raw JSON responses
//! against them before they are decoded into typed entities.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{SchemaRegistry, names};
