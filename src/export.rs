//! Export Adapter
//!
//! Serializes a catalog to pretty-printed JSON (full field set) and to a
//! 4-column CSV (`Id,Title,Author,Pages`). Existing files are overwritten
//! without confirmation; any write failure surfaces as
//! [`CatalogError::ExportIo`] carrying the offending path. File handles
//! are scoped to each function, so they close on every exit path.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::CatalogError;
use crate::models::Book;

/// Write the catalog to `json_path` and `csv_path`, in that order.
pub fn export_catalog(
    books: &[Book],
    json_path: &Path,
    csv_path: &Path,
) -> Result<(), CatalogError> {
    export_json(books, json_path)?;
    export_csv(books, csv_path)?;
    Ok(())
}

/// Pretty-printed JSON array with the full field set, in catalog order.
pub fn export_json(books: &[Book], path: &Path) -> Result<(), CatalogError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, books).map_err(|e| io_error(path, e.into()))?;
    writer.write_all(b"\n").map_err(|e| io_error(path, e))?;
    writer.flush().map_err(|e| io_error(path, e))?;

    info!(path = %path.display(), books = books.len(), "wrote JSON export");
    Ok(())
}

/// `Id,Title,Author,Pages` header plus one row per book in catalog
/// order. The author column holds the author's name.
pub fn export_csv(books: &[Book], path: &Path) -> Result<(), CatalogError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    writer
        .write_record(["Id", "Title", "Author", "Pages"])
        .map_err(|e| csv_error(path, e))?;
    for book in books {
        let author = book.author_name()?;
        let id = book.id.to_string();
        let pages = book.pages.to_string();
        writer
            .write_record([id.as_str(), book.title.as_str(), author, pages.as_str()])
            .map_err(|e| csv_error(path, e))?;
    }
    writer.flush().map_err(|e| io_error(path, e))?;

    info!(path = %path.display(), books = books.len(), "wrote CSV export");
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> CatalogError {
    CatalogError::ExportIo {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> CatalogError {
    match source.into_kind() {
        csv::ErrorKind::Io(e) => io_error(path, e),
        other => io_error(
            path,
            io::Error::new(io::ErrorKind::Other, format!("csv write failed: {:?}", other)),
        ),
    }
}
