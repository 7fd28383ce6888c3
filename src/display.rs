//! Report Formatting and Display Management
//!
//! Renders engine results either as structured JSON (for programmatic
//! consumption) or as colored, human-readable terminal reports. Display
//! is a lossy view: a book without an author renders as `unknown` here,
//! while the engine and the export adapter treat that as an error.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::models::{Book, CatalogAudit, PageSummary, TitleReport};

pub struct ReportManager;

impl Default for ReportManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportManager {
    pub fn new() -> Self {
        Self
    }

    pub fn report_filter(&self, books: &[Book], json_output: bool) {
        if json_output {
            self.print_json(&serde_json::json!({ "books": books }));
            return;
        }

        self.print_header("Book Catalog - Filtered Books");
        if books.is_empty() {
            println!("\n{}", "No books matched the filter.".bright_yellow());
            return;
        }
        println!(
            "\n{} {} books\n",
            "📚".bright_yellow(),
            books.len().to_string().bright_white().bold()
        );
        for book in books {
            self.print_book_line(book);
        }
    }

    pub fn report_summary(&self, summary: &PageSummary, titles: &TitleReport, json_output: bool) {
        if json_output {
            self.print_json(&serde_json::json!({
                "summary": summary,
                "titles": titles,
            }));
            return;
        }

        self.print_header("Book Catalog - Summary");

        println!(
            "\n{} Average pages: {}",
            "📊".bright_yellow(),
            format!("{:.2}", summary.average_pages).bright_green().bold()
        );
        match &summary.with_most_pages {
            Some(book) => println!(
                "   Most pages:   {} ({})",
                book.title.bright_cyan(),
                book.pages.to_string().bright_white()
            ),
            None => println!("   Most pages:   {}", "n/a".bright_yellow()),
        }
        match &summary.with_fewest_pages {
            Some(book) => println!(
                "   Fewest pages: {} ({})",
                book.title.bright_cyan(),
                book.pages.to_string().bright_white()
            ),
            None => println!("   Fewest pages: {}", "n/a".bright_yellow()),
        }

        println!("\n{} Titles (alphabetical):", "🔤".bright_blue());
        for title in &titles.sorted_titles {
            println!("   {}", title.bright_cyan());
        }

        println!("\n{} Books per author:", "✍️".bright_blue());
        for (author, count) in &titles.count_by_author {
            println!(
                "   {}: {}",
                author.bright_cyan(),
                count.to_string().bright_white().bold()
            );
        }
    }

    pub fn report_authors(&self, groups: &BTreeMap<String, Vec<Book>>, json_output: bool) {
        if json_output {
            self.print_json(&serde_json::json!({ "authors": groups }));
            return;
        }

        self.print_header("Book Catalog - Books by Author");
        for (author, books) in groups {
            println!(
                "\n{} {} ({} books)",
                "✍️".bright_blue(),
                author.bright_white().bold(),
                books.len().to_string().bright_white()
            );
            for book in books {
                let words = book
                    .word_count
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "   {} — {} pages, {} words",
                    book.title.bright_cyan(),
                    book.pages.to_string().bright_white(),
                    words.bright_white()
                );
            }
        }
    }

    pub fn report_audit(&self, audit: &CatalogAudit, json_output: bool) {
        if json_output {
            self.print_json(&serde_json::json!({ "audit": audit }));
            return;
        }

        self.print_header("Book Catalog - Audit");

        println!("\n{} Duplicate authors:", "👥".bright_blue());
        if audit.duplicate_authors.is_empty() {
            println!("   {}", "none".bright_yellow());
        } else {
            for author in &audit.duplicate_authors {
                println!("   {}", author.bright_cyan());
            }
        }

        println!("\n{} Books without publication timestamp:", "📅".bright_blue());
        if audit.missing_timestamps.is_empty() {
            println!("   {}", "none".bright_yellow());
        } else {
            for book in &audit.missing_timestamps {
                self.print_book_line(book);
            }
        }
    }

    pub fn report_recent(&self, books: &[Book], json_output: bool) {
        if json_output {
            self.print_json(&serde_json::json!({ "recent": books }));
            return;
        }

        self.print_header("Book Catalog - Most Recent Books");
        if books.is_empty() {
            println!("\n{}", "No books carry a publication timestamp.".bright_yellow());
            return;
        }
        println!();
        for book in books {
            let ts = book.publication_timestamp.as_deref().unwrap_or("-");
            println!(
                "   {} {} — {}",
                ts.bright_white().bold(),
                book.title.bright_cyan(),
                self.author_label(book).bright_white()
            );
        }
    }

    fn print_header(&self, title: &str) {
        println!("\n{}", "=".repeat(80).bright_cyan());
        println!("{}", title.bright_white().bold());
        println!("{}", "=".repeat(80).bright_cyan());
    }

    fn print_book_line(&self, book: &Book) {
        println!(
            "   {} — {} ({} pages)",
            book.title.bright_cyan(),
            self.author_label(book).bright_white(),
            book.pages.to_string().bright_white()
        );
    }

    fn author_label(&self, book: &Book) -> String {
        book.author
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn print_json(&self, value: &serde_json::Value) {
        match serde_json::to_string_pretty(value) {
            Ok(json_str) => println!("{}", json_str),
            Err(e) => eprintln!("Error serializing report to JSON: {}", e),
        }
    }
}
