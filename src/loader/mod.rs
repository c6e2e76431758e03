//! Catalog loading from CSV sources
//!
//! # Error Handling Strategy
//!
//! The loader separates structural failures from row-level noise:
//!
//! - **Structural failures**: A source that cannot be opened or read is
//!   [`LoadError::SourceNotFound`]; a source without a header row or without the
//!   required columns is [`LoadError::SourceMalformed`]. Both abort the load.
//!
//! - **Row-level repair**: Missing text cells become empty strings, the `type`
//!   column is lowercased and trimmed, and unparseable dates become `None`.
//!   Repairs are logged at debug level with a warning summary, and never fail
//!   the load.
//!
//! - **Caching**: [`CatalogCache`] keeps one catalog per source file and reloads
//!   it when the file's length or modification time changes.
//!
//! [`LoadError::SourceNotFound`]: crate::errors::LoadError::SourceNotFound
//! [`LoadError::SourceMalformed`]: crate::errors::LoadError::SourceMalformed

pub mod cache;
pub mod catalog;
pub mod dates;

pub use cache::{CatalogCache, SourceSignature};
pub use catalog::{REQUIRED_COLUMNS, load_catalog, read_catalog};
pub use dates::parse_date;
