//! Content Search - keyword lookup over a blog / case study catalog
//!
//! This library loads a small content catalog from a CSV file and answers
//! keyword queries against it. It supports:
//!
//! - Loading and normalizing catalog rows (missing text, messy dates, type casing)
//! - Caching loaded catalogs per source file with change detection
//! - Case-insensitive substring search across title, summary and full content
//! - Display-ready results with a formatted date and a short snippet
//!
//! # Example
//!
//! ```no_run
//! use content_search::{load_catalog, search};
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("rapyder_content.csv"))?;
//! for result in search(&catalog, "cloud") {
//!     println!("{} ({}) {}", result.title, result.date, result.snippet);
//! }
//! # Ok::<(), content_search::LoadError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod errors;
pub mod loader;
pub mod models;
pub mod search;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use errors::LoadError;
pub use loader::{CatalogCache, load_catalog};
pub use models::{Catalog, Record, SearchResult};
pub use search::search;
