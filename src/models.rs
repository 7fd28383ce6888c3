//! Core Data Models
//!
//! Defines the catalog records and the result types produced by the
//! transformation engine.
//!
//! ## Data Flow
//!
//! 1. **Input**: [`Book`] records parsed from the catalog file by [`crate::loader`]
//! 2. **Transformation**: the engine returns new collections of updated records
//! 3. **Reports**: [`TitleReport`], [`PageSummary`], [`CatalogAudit`] summarize a catalog
//! 4. **Output**: the full collection serializes to JSON and CSV via [`crate::export`]
//!
//! ## Conventions
//!
//! - All public types support serde serialization; the wire format uses
//!   camelCase field names (`publicationTimestamp`, `wordCount`, ...)
//! - Absent optional fields serialize as `null` so an exported catalog
//!   round-trips field-for-field
//! - `author` is optional at the model level; operations that need the
//!   author name fail with [`CatalogError::MissingAuthor`] when it is absent

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub first_surname: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title: String,
    /// Raw base-10 epoch seconds until normalized, `YYYY-MM-DD` afterwards.
    #[serde(default)]
    pub publication_timestamp: Option<String>,
    pub pages: u32,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    /// Derived field, absent until computed.
    #[serde(default)]
    pub word_count: Option<u64>,
}

impl Book {
    /// The author's name, or `MissingAuthor` when the record has none.
    pub fn author_name(&self) -> Result<&str, CatalogError> {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .ok_or(CatalogError::MissingAuthor { book_id: self.id })
    }
}

/// Titles in ascending lexicographic order plus per-author book counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleReport {
    pub sorted_titles: Vec<String>,
    pub count_by_author: BTreeMap<String, u64>,
}

/// Page statistics over a catalog. Both extremal books are `None` for an
/// empty catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub average_pages: f64,
    pub with_most_pages: Option<Book>,
    pub with_fewest_pages: Option<Book>,
}

/// Duplicate author names (each once, in first-appearance order) and the
/// subsequence of books without a publication timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAudit {
    pub duplicate_authors: Vec<String>,
    pub missing_timestamps: Vec<Book>,
}
