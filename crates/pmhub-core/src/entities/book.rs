use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Highest rating a book can carry.
pub const MAX_RATING: f32 = 5.0;

/// A recommended book from the self-study reading list. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub rating: f32,
    pub amazon_url: String,
    pub goodreads_url: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Book {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the rating is outside `0..=5` or not a number.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CoreError::Validation(format!(
                "book '{}' has rating {} outside 0..={MAX_RATING}",
                self.id, self.rating
            )));
        }
        Ok(())
    }

    /// Case-insensitive category match. Books without a category never match.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category.trim()))
    }
}

/// Order a reading list best-rated first, ties broken by title.
pub fn sort_by_rating(books: &mut [Book]) {
    books.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| a.title.cmp(&b.title))
    });
}
