use std::path::Path;

use anyhow::Context;
use pmhub_core::entities::{Book, sort_by_rating};
use pmhub_schema::{SchemaRegistry, names};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BooksArgs;
use crate::output::output;

/// Handle `pmhub books`.
pub fn handle(args: &BooksArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut books = load_books(&args.file)?;

    if let Some(category) = args.category.as_deref() {
        books.retain(|book| book.in_category(category));
    }
    sort_by_rating(&mut books);
    if let Some(limit) = flags.limit {
        books.truncate(limit as usize);
    }

    output(&books, flags.format)
}

/// Read, schema-check, and decode a JSON array of books.
fn load_books(path: &Path) -> anyhow::Result<Vec<Book>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    SchemaRegistry::new()?
        .validate(names::BOOK_LIST, &value)
        .with_context(|| format!("{} does not match the book list schema", path.display()))?;

    let books: Vec<Book> = serde_json::from_value(value)?;
    for book in &books {
        book.validate()?;
    }
    Ok(books)
}
