//! Data models for the content catalog.
//!
//! - [`Record`] - One normalized row of the source dataset
//! - [`Catalog`] - The immutable, ordered collection of records
//! - [`SearchResult`] - Display-ready representation of a matching record
//!
//! Records are only ever built by the loader, which guarantees the text
//! fields are present and `content_type` is normalized.

pub mod record;
pub mod search;

pub use record::{Catalog, Record};
pub use search::SearchResult;
