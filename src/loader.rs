//! Catalog file loader, the input boundary.
//!
//! Reads an ordered JSON array of book objects from disk. Beyond what
//! serde requires to populate the records, no schema validation happens
//! here; malformed timestamps only surface when an operation parses them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Book;

/// Load a catalog file, preserving record order.
pub fn load_catalog(path: &Path) -> Result<Vec<Book>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
    let books: Vec<Book> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file: {}", path.display()))?;

    debug!(path = %path.display(), books = books.len(), "loaded catalog");
    Ok(books)
}
