//! Performance benchmarks for the catalog engine
//!
//! Run with: cargo bench

use book_catalog::engine;
use book_catalog::models::{Author, Book};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Generate a synthetic catalog with a mix of titles, authors and timestamps
fn generate_catalog(num_books: usize) -> Vec<Book> {
    (0..num_books as u64)
        .map(|i| Book {
            id: i,
            title: if i % 5 == 0 {
                format!("Harry and the Benchmark {}", i)
            } else {
                format!("Book {}", i)
            },
            publication_timestamp: if i % 7 == 0 {
                None
            } else {
                Some((800_000_000 + i * 3_600).to_string())
            },
            pages: 100 + (i % 1200) as u32,
            summary: None,
            author: Some(Author {
                name: format!("Author {}", i % 50),
                first_surname: None,
                bio: None,
            }),
            word_count: None,
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let books = generate_catalog(10_000);
    c.bench_function("filter_by_pages_and_title/10k", |b| {
        b.iter(|| engine::filter_by_pages_and_title(black_box(&books), 400, "Harry"))
    });
}

fn benchmark_summarize(c: &mut Criterion) {
    let books = generate_catalog(10_000);
    c.bench_function("summarize_pages/10k", |b| {
        b.iter(|| engine::summarize_pages(black_box(&books)))
    });
}

fn benchmark_most_recent(c: &mut Criterion) {
    let books = generate_catalog(10_000);
    c.bench_function("most_recent_books/10k", |b| {
        b.iter(|| engine::most_recent_books(black_box(&books), 5).unwrap())
    });
}

fn benchmark_word_count_groups(c: &mut Criterion) {
    let books = generate_catalog(10_000);
    c.bench_function("word_count_groups/10k", |b| {
        b.iter(|| engine::word_count_groups(black_box(&books)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_summarize,
    benchmark_most_recent,
    benchmark_word_count_groups
);
criterion_main!(benches);
