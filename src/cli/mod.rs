//! Command-line presentation layer.
//!
//! Owns everything user-facing around the core: resolving the source path,
//! rejecting empty keywords, rendering result tables and the "not found"
//! messages.

pub mod commands;
pub mod stats;
pub mod table;

pub use commands::{Cli, Commands, run};
pub use stats::CatalogStats;
pub use table::{COLUMN_LABELS, render_table};
