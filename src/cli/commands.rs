use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::stats::CatalogStats;
use super::table::render_table;
use crate::errors::LoadError;
use crate::loader::CatalogCache;
use crate::models::Catalog;
use crate::search::{normalize_keyword, search};
use crate::tui::run_interactive;
use crate::utils::{resolve_source_path, sanitize_cell};

/// Exit status for usage errors such as an empty keyword
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "content-search")]
#[command(version = "0.1.0")]
#[command(about = "Search blogs and case studies by keyword", long_about = None)]
pub struct Cli {
    /// Catalog CSV file [default: $CONTENT_SEARCH_SOURCE or ./rapyder_content.csv]
    #[arg(long, short, global = true, value_name = "PATH")]
    pub source: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find entries whose title, summary or content mention a keyword
    Search {
        /// Keyword to look for (case-insensitive, e.g. 'cloud', 'AI', 'FinOps')
        keyword: String,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about the catalog
    Stats,
    /// Browse the catalog in an interactive terminal UI
    Interactive,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let source = resolve_source_path(cli.source.as_deref());

    match &cli.command {
        Some(Commands::Search { keyword, json }) => run_search(&source, keyword, *json),
        Some(Commands::Stats) => show_stats(&source),
        Some(Commands::Interactive) => {
            let mut cache = CatalogCache::new();
            match cache.get_or_load(&source) {
                Ok(catalog) => {
                    run_interactive(source, cache, catalog)?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => Ok(report_load_error(&e)),
            }
        }
        None => {
            println!("Use --help for usage information");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_search(source: &Path, keyword: &str, json: bool) -> Result<ExitCode> {
    if normalize_keyword(keyword).is_empty() {
        eprintln!("Please enter a keyword to search.");
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let catalog = match load(source) {
        Ok(catalog) => catalog,
        Err(code) => return Ok(code),
    };

    let results = search(&catalog, keyword);
    let shown_keyword = sanitize_cell(keyword);

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", out);
    } else if results.is_empty() {
        println!("No blogs or case studies found containing '{}'.", shown_keyword);
    } else {
        println!("Found {} matching entries for '{}'!", results.len(), shown_keyword);
        println!();
        print!("{}", render_table(&results));
    }

    Ok(ExitCode::SUCCESS)
}

fn show_stats(source: &Path) -> Result<ExitCode> {
    let catalog = match load(source) {
        Ok(catalog) => catalog,
        Err(code) => return Ok(code),
    };
    let stats = CatalogStats::from_catalog(&catalog);

    println!("Content Catalog Statistics");
    println!("==========================");
    println!("Total entries: {}", stats.total);
    for (content_type, count) in &stats.by_type {
        let label = if content_type.is_empty() { "(no type)" } else { content_type.as_str() };
        println!("  {}: {}", sanitize_cell(label), count);
    }
    println!("Entries without a valid date: {}", stats.undated);
    println!();
    println!("Source: {}", source.display());

    if let Some(earliest) = stats.earliest {
        println!("Earliest entry: {}", earliest.format("%Y-%m-%d"));
    }
    if let Some(latest) = stats.latest {
        println!("Latest entry: {}", latest.format("%Y-%m-%d"));
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the catalog, printing the user-facing message on failure
fn load(source: &Path) -> std::result::Result<Catalog, ExitCode> {
    crate::loader::load_catalog(source).map_err(|e| report_load_error(&e))
}

fn report_load_error(err: &LoadError) -> ExitCode {
    match err {
        LoadError::SourceNotFound { path, .. } => {
            eprintln!("Error: '{}' not found. Please ensure the file exists.", path.display());
        }
        LoadError::SourceMalformed { .. } => {
            eprintln!("Error: {}", err);
        }
    }
    ExitCode::FAILURE
}
