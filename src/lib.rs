//! Book Catalog Library
//!
//! Analytical transformations over an in-memory catalog of book records:
//! filtering, author-based aggregation, timestamp normalization, summary
//! statistics, duplicate detection, recency ranking, and export to JSON
//! and CSV.
//!
//! ## Architecture Overview
//!
//! The library is organized around several key modules:
//!
//! - [`models`] - Book and author records plus the engine's report types
//! - [`engine`] - The transformation operations (stateless functions over
//!   the catalog)
//! - [`timestamp`] - Epoch-seconds parsing and calendar-date conversion
//! - [`export`] - JSON and CSV export adapter
//! - [`loader`] - Catalog file loading (the input boundary)
//! - [`display`] - Terminal and JSON report rendering
//! - [`config`] - Configuration management with environment variable support
//! - [`logging`] - Structured logging with JSON and pretty-print formats
//!
//! ## Usage Example
//!
//! ```rust
//! use book_catalog::{engine, models::{Author, Book}};
//!
//! let catalog = vec![Book {
//!     id: 1,
//!     title: "The Stand".to_string(),
//!     publication_timestamp: Some("252453600".to_string()),
//!     pages: 1153,
//!     summary: None,
//!     author: Some(Author {
//!         name: "Stephen".to_string(),
//!         first_surname: Some("King".to_string()),
//!         bio: None,
//!     }),
//!     word_count: None,
//! }];
//!
//! let summary = engine::summarize_pages(&catalog);
//! assert_eq!(summary.average_pages, 1153.0);
//! ```
//!
//! ## Semantics
//!
//! The engine is stateless: all state lives in the passed-in collection,
//! and no references are retained after a call returns. Operations that
//! update record fields return new collections of updated value records
//! rather than mutating shared state. Errors ([`CatalogError`]) propagate
//! to the immediate caller; an operation either completes fully over its
//! input or fails entirely.

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod models;
pub mod timestamp;

pub use error::CatalogError;
pub use models::*;
