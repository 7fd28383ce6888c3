//! Typed errors for the catalog engine and export adapter.
//!
//! Absent optional fields (no timestamp, no summary) are valid states and
//! never produce an error; these variants cover malformed values and
//! failed writes. Every error propagates to the immediate caller: the
//! engine performs no retries and keeps no partial results.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A publication timestamp is present but is not a base-10 epoch
    /// value (or falls outside the representable calendar range).
    /// Indicates upstream data corruption, so it is surfaced rather than
    /// skipped.
    #[error("invalid publication timestamp {value:?}: expected base-10 epoch seconds")]
    InvalidTimestamp { value: String },

    /// An operation needed `author.name` on a book without an author.
    #[error("book {book_id} has no author")]
    MissingAuthor { book_id: u64 },

    /// A file write failed during export.
    #[error("failed to write catalog export to {path}")]
    ExportIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
