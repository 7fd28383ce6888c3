use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod display;
mod engine;
mod error;
mod export;
mod loader;
mod logging;
mod models;
mod timestamp;

use config::get_config;
use display::ReportManager;

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Analytical transformations and export for an in-memory book catalog")]
#[command(version)]
struct Cli {
    /// Path to the catalog file (JSON array of book records)
    #[arg(long, global = true, default_value = "books.json")]
    input: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter books by page count and title, or by exact author name
    Filter {
        /// Keep books with more than this many pages
        #[arg(long, default_value_t = 400)]
        min_pages: u32,
        /// Keep books whose title contains this fragment (case-sensitive)
        #[arg(long, default_value = "Harry")]
        title_contains: String,
        /// Filter by exact author name instead of pages/title
        #[arg(long)]
        author: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show page statistics, sorted titles and per-author counts
    Summary {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show books grouped by author, annotated with word counts
    Authors {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show duplicate authors and books missing a publication timestamp
    Audit {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show the most recently published books
    Recent {
        /// Show the N most recent books
        #[arg(long)]
        limit: Option<usize>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Export the catalog to JSON and CSV files
    Export {
        /// JSON output path (defaults to the configured export path)
        #[arg(long)]
        json_path: Option<PathBuf>,
        /// CSV output path (defaults to the configured export path)
        #[arg(long)]
        csv_path: Option<PathBuf>,
        /// Rewrite epoch timestamps as YYYY-MM-DD dates before exporting
        #[arg(long)]
        normalize_dates: bool,
    },
}

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Summary { json: false });
    let json_output = wants_json(&command);

    match run(&cli.input, command) {
        Ok(()) => Ok(()),
        Err(e) => handle_error(e, json_output),
    }
}

fn run(input: &Path, command: Commands) -> Result<()> {
    let config = get_config();
    let reports = ReportManager::new();
    let books = loader::load_catalog(input)?;

    match command {
        Commands::Filter {
            min_pages,
            title_contains,
            author,
            json,
        } => {
            let matches = match author {
                Some(name) => engine::filter_by_author(&books, &name)?,
                None => engine::filter_by_pages_and_title(&books, min_pages, &title_contains),
            };
            reports.report_filter(&matches, json);
        }
        Commands::Summary { json } => {
            let summary = engine::summarize_pages(&books);
            let titles = engine::titles_and_counts(&books)?;
            reports.report_summary(&summary, &titles, json);
        }
        Commands::Authors { json } => {
            let groups = engine::word_count_groups(&books)?;
            reports.report_authors(&groups, json);
        }
        Commands::Audit { json } => {
            let audit = engine::audit_catalog(&books)?;
            reports.report_audit(&audit, json);
        }
        Commands::Recent { limit, json } => {
            let limit = limit.unwrap_or(config.output.recent_limit);
            let recent = engine::most_recent_books(&books, limit)?;
            reports.report_recent(&recent, json);
        }
        Commands::Export {
            json_path,
            csv_path,
            normalize_dates,
        } => {
            let json_path = json_path.unwrap_or_else(|| config.output.json_export_path.clone());
            let csv_path = csv_path.unwrap_or_else(|| config.output.csv_export_path.clone());

            let books = if normalize_dates {
                engine::normalize_publication_dates(books)?
            } else {
                books
            };

            export::export_catalog(&books, &json_path, &csv_path)?;
            println!(
                "{} Exported {} books to {} and {}",
                "✅".bright_green(),
                books.len().to_string().bright_white().bold(),
                json_path.display().to_string().bright_cyan(),
                csv_path.display().to_string().bright_cyan()
            );
        }
    }

    Ok(())
}

fn wants_json(command: &Commands) -> bool {
    match command {
        Commands::Filter { json, .. }
        | Commands::Summary { json }
        | Commands::Authors { json }
        | Commands::Audit { json }
        | Commands::Recent { json, .. } => *json,
        Commands::Export { .. } => false,
    }
}

fn handle_error(e: anyhow::Error, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{{\"error\": \"{}\"}}", e);
    } else {
        eprintln!("Error: {}", e);
    }
    process::exit(1);
}
