use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use book_catalog::models::{Author, Book};

#[allow(dead_code)]
pub fn build_book(id: u64, title: &str, author_name: &str, pages: u32) -> Book {
    build_dated_book(id, title, author_name, pages, None)
}

#[allow(dead_code)]
pub fn build_dated_book(
    id: u64,
    title: &str,
    author_name: &str,
    pages: u32,
    timestamp: Option<&str>,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        publication_timestamp: timestamp.map(str::to_string),
        pages,
        summary: None,
        author: Some(Author {
            name: author_name.to_string(),
            first_surname: None,
            bio: None,
        }),
        word_count: None,
    }
}

/// Eight-book catalog mirroring the shape the engine is exercised
/// against everywhere: two J.K. Rowling titles, five single-title
/// authors, two books without a timestamp, 4225 pages in total.
#[allow(dead_code)]
pub fn fixture_catalog() -> Vec<Book> {
    vec![
        build_book(1, "The Hunger Games", "Suzanne", 374),
        build_dated_book(
            2,
            "Harry Potter and the Sorcerer's Stone",
            "J.K. Rowling",
            309,
            Some("867276000"),
        ),
        build_dated_book(3, "The Help", "Kathryn", 522, Some("1234216800")),
        build_book(4, "To Kill a Mockingbird", "Harper", 324),
        build_dated_book(
            5,
            "Harry Potter and the Deathly Hallows",
            "J.K. Rowling",
            607,
            Some("1184968800"),
        ),
        build_dated_book(6, "Life of Pi", "Yann", 460, Some("1041372000")),
        build_dated_book(7, "The Stand", "Stephen", 1153, Some("252453600")),
        build_dated_book(8, "The Kite Runner", "Khaled", 476, Some("1054418400")),
    ]
}

/// Write a catalog file the way the external loader expects it.
#[allow(dead_code)]
pub fn write_catalog(dir: &Path, filename: &str, books: &[Book]) -> Result<PathBuf> {
    let path = dir.join(filename);
    fs::write(&path, serde_json::to_string_pretty(books)?)?;
    Ok(path)
}
