//! Catalog Transformation Engine
//!
//! The analytical operations over an in-memory book catalog: filtering,
//! author aggregation, timestamp normalization, page statistics,
//! duplicate detection and recency ranking.
//!
//! ## Semantics
//!
//! - Every operation is a stateless function over the passed-in
//!   collection; nothing is retained between calls
//! - Operations that update record fields consume the collection and
//!   return a new one instead of mutating shared records
//! - Filters return order-preserving subsequences; sorts are stable, so
//!   ties keep their original relative order
//! - An operation either completes over the whole input or fails with a
//!   [`CatalogError`]; there are no partial results
//!
//! Grouping by author name is a derived index over string equality, not
//! a foreign-key relationship: two authors sharing a name land in the
//! same group.

use std::collections::{BTreeMap, HashMap};

use chrono::{Local, TimeZone};
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::models::{Book, CatalogAudit, PageSummary, TitleReport};
use crate::timestamp;

/// Derived word count per page.
pub const WORDS_PER_PAGE: u64 = 250;

/// Books with more than `min_pages` pages whose title contains
/// `title_fragment` (case-sensitive literal match). Order preserved; an
/// empty result is valid.
pub fn filter_by_pages_and_title(
    books: &[Book],
    min_pages: u32,
    title_fragment: &str,
) -> Vec<Book> {
    let matches: Vec<Book> = books
        .iter()
        .filter(|b| b.pages > min_pages && b.title.contains(title_fragment))
        .cloned()
        .collect();
    debug!(
        min_pages,
        title_fragment,
        matched = matches.len(),
        "filtered catalog by pages and title"
    );
    matches
}

/// Books whose author name equals `author_name` exactly.
pub fn filter_by_author(books: &[Book], author_name: &str) -> Result<Vec<Book>, CatalogError> {
    let mut matches = Vec::new();
    for book in books {
        if book.author_name()? == author_name {
            matches.push(book.clone());
        }
    }
    Ok(matches)
}

/// Titles sorted ascending plus the number of books per author name.
/// Does not alter the input.
pub fn titles_and_counts(books: &[Book]) -> Result<TitleReport, CatalogError> {
    let mut sorted_titles: Vec<String> = books.iter().map(|b| b.title.clone()).collect();
    sorted_titles.sort();

    let mut count_by_author: BTreeMap<String, u64> = BTreeMap::new();
    for book in books {
        *count_by_author
            .entry(book.author_name()?.to_string())
            .or_insert(0) += 1;
    }

    info!(
        titles = sorted_titles.len(),
        authors = count_by_author.len(),
        "built title/author index"
    );
    Ok(TitleReport {
        sorted_titles,
        count_by_author,
    })
}

/// Rewrites every present publication timestamp from epoch seconds to a
/// `YYYY-MM-DD` date in the process-local zone. Absent timestamps pass
/// through untouched; a present non-numeric value fails the whole
/// operation.
///
/// Not idempotent: a second run sees the date strings and fails with
/// `InvalidTimestamp`.
pub fn normalize_publication_dates(books: Vec<Book>) -> Result<Vec<Book>, CatalogError> {
    normalize_publication_dates_in(books, &Local)
}

/// Zone-parameterized variant of [`normalize_publication_dates`].
pub fn normalize_publication_dates_in<Tz: TimeZone>(
    books: Vec<Book>,
    tz: &Tz,
) -> Result<Vec<Book>, CatalogError> {
    books
        .into_iter()
        .map(|mut book| {
            if let Some(raw) = &book.publication_timestamp {
                let secs = timestamp::parse_epoch(raw)?;
                book.publication_timestamp = Some(timestamp::epoch_to_date_in(secs, tz)?);
            }
            Ok(book)
        })
        .collect()
}

/// Mean page count plus the first-occurring maximum and minimum books.
/// An empty catalog yields average 0 and absent extremal books.
pub fn summarize_pages(books: &[Book]) -> PageSummary {
    if books.is_empty() {
        return PageSummary {
            average_pages: 0.0,
            with_most_pages: None,
            with_fewest_pages: None,
        };
    }

    let total: u64 = books.iter().map(|b| u64::from(b.pages)).sum();
    let average_pages = total as f64 / books.len() as f64;

    // Strict comparisons so the first occurrence wins on ties.
    let mut most = &books[0];
    let mut fewest = &books[0];
    for book in &books[1..] {
        if book.pages > most.pages {
            most = book;
        }
        if book.pages < fewest.pages {
            fewest = book;
        }
    }

    PageSummary {
        average_pages,
        with_most_pages: Some(most.clone()),
        with_fewest_pages: Some(fewest.clone()),
    }
}

/// Returns records with `word_count = pages * 250` set on every book.
pub fn with_word_counts(books: Vec<Book>) -> Vec<Book> {
    books
        .into_iter()
        .map(|mut book| {
            book.word_count = Some(u64::from(book.pages) * WORDS_PER_PAGE);
            book
        })
        .collect()
}

/// Word-count-annotated books grouped by author name. Original relative
/// order is kept within each group; groups iterate in name order.
pub fn word_count_groups(books: &[Book]) -> Result<BTreeMap<String, Vec<Book>>, CatalogError> {
    let mut groups: BTreeMap<String, Vec<Book>> = BTreeMap::new();
    for book in with_word_counts(books.to_vec()) {
        let name = book.author_name()?.to_string();
        groups.entry(name).or_default().push(book);
    }
    Ok(groups)
}

/// Author names appearing on more than one book (each once, in
/// first-appearance order) and the subsequence of books without a
/// publication timestamp. Pure.
pub fn audit_catalog(books: &[Book]) -> Result<CatalogAudit, CatalogError> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for book in books {
        *counts.entry(book.author_name()?).or_insert(0) += 1;
    }

    let mut duplicate_authors: Vec<String> = Vec::new();
    for book in books {
        let name = book.author_name()?;
        if counts[name] > 1 && !duplicate_authors.iter().any(|n| n == name) {
            duplicate_authors.push(name.to_string());
        }
    }

    let missing_timestamps: Vec<Book> = books
        .iter()
        .filter(|b| b.publication_timestamp.is_none())
        .cloned()
        .collect();

    debug!(
        duplicates = duplicate_authors.len(),
        missing = missing_timestamps.len(),
        "audited catalog"
    );
    Ok(CatalogAudit {
        duplicate_authors,
        missing_timestamps,
    })
}

/// The `limit` most recently published books, most recent first. Books
/// without a timestamp are excluded; a present non-numeric timestamp
/// fails the operation. The sort is stable, so equal timestamps keep
/// input order.
pub fn most_recent_books(books: &[Book], limit: usize) -> Result<Vec<Book>, CatalogError> {
    let mut dated: Vec<(i64, &Book)> = Vec::new();
    for book in books {
        if let Some(raw) = &book.publication_timestamp {
            dated.push((timestamp::parse_epoch(raw)?, book));
        }
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(dated
        .into_iter()
        .take(limit)
        .map(|(_, book)| book.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    fn book(id: u64, title: &str, author: &str, pages: u32, ts: Option<&str>) -> Book {
        Book {
            id,
            title: title.to_string(),
            publication_timestamp: ts.map(str::to_string),
            pages,
            summary: None,
            author: Some(Author {
                name: author.to_string(),
                first_surname: None,
                bio: None,
            }),
            word_count: None,
        }
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let books = vec![
            book(1, "Harry B", "a", 500, None),
            book(2, "other", "b", 700, None),
            book(3, "Harry A", "c", 600, None),
        ];
        let filtered = filter_by_pages_and_title(&books, 400, "Harry");
        let ids: Vec<u64> = filtered.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_min_pages_is_exclusive() {
        let books = vec![book(1, "Harry", "a", 400, None)];
        assert!(filter_by_pages_and_title(&books, 400, "Harry").is_empty());
    }

    #[test]
    fn test_word_count_zero_pages() {
        let annotated = with_word_counts(vec![book(1, "pamphlet", "a", 0, None)]);
        assert_eq!(annotated[0].word_count, Some(0));
    }

    #[test]
    fn test_summarize_tie_first_occurrence_wins() {
        let books = vec![
            book(1, "first", "a", 300, None),
            book(2, "second", "b", 300, None),
        ];
        let summary = summarize_pages(&books);
        assert_eq!(summary.with_most_pages.unwrap().id, 1);
        assert_eq!(summary.with_fewest_pages.unwrap().id, 1);
    }

    #[test]
    fn test_most_recent_stable_on_ties() {
        let books = vec![
            book(1, "first", "a", 100, Some("1000")),
            book(2, "second", "b", 100, Some("1000")),
            book(3, "third", "c", 100, Some("2000")),
        ];
        let recent = most_recent_books(&books, 5).unwrap();
        let ids: Vec<u64> = recent.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
