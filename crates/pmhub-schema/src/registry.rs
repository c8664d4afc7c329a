//! Central schema registry for the content entities.
//!
//! The `SchemaRegistry` builds JSON Schemas from pmhub-core types at
//! construction time using [`schemars::schema_for!`] and compiles a
//! `jsonschema` validator for each, so validation on the request path does
//! not recompile.

use std::collections::HashMap;

use jsonschema::Validator;
use schemars::schema_for;

use crate::error::SchemaError;

/// Registered schema names.
pub mod names {
    pub const CASE_STUDY: &str = "case_study";
    pub const CASE_STUDY_LIST: &str = "case_study_list";
    pub const BOOK: &str = "book";
    pub const BOOK_LIST: &str = "book_list";
    pub const CASE_STUDIES_FILTERS: &str = "case_studies_filters";
    pub const CASE_STUDY_FACETS: &str = "case_study_facets";
}

struct Entry {
    schema: serde_json::Value,
    validator: Validator,
}

/// Store of all JSON Schemas for the content API entities.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Entry>,
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("schemas", &self.list())
            .finish()
    }
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {{
        let schema = serde_json::to_value(schema_for!($ty))
            .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?;
        $map.insert($name, Entry { schema, validator });
    }};
}

impl SchemaRegistry {
    /// Build a registry containing every content entity schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Generation`] if a generated schema fails to
    /// serialize or compile.
    pub fn new() -> Result<Self, SchemaError> {
        use pmhub_core::entities::{Book, CaseStudiesFilters, CaseStudy, CaseStudyFacets};

        let mut schemas = HashMap::new();
        register!(schemas, names::CASE_STUDY, CaseStudy);
        register!(schemas, names::CASE_STUDY_LIST, Vec<CaseStudy>);
        register!(schemas, names::BOOK, Book);
        register!(schemas, names::BOOK_LIST, Vec<Book>);
        register!(schemas, names::CASE_STUDIES_FILTERS, CaseStudiesFilters);
        register!(schemas, names::CASE_STUDY_FACETS, CaseStudyFacets);
        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name).map(|entry| &entry.schema)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let entry = self
            .schemas
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let errors: Vec<String> = entry
            .validator
            .iter_errors(instance)
            .map(|e| format!("{}: {e}", e.instance_path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
