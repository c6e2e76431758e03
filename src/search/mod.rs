//! Keyword search over a loaded catalog.
//!
//! Matching is a literal, case-insensitive substring test against `title`,
//! `summary` and `full_content`. Results keep catalog order; there is no
//! ranking.

pub mod matcher;
pub mod snippet;

pub use matcher::{MatchedField, matched_field, normalize_keyword};
pub use snippet::{SNIPPET_CHARS, SNIPPET_SUFFIX, make_snippet};

use crate::models::{Catalog, Record, SearchResult};

/// Date layout used in results
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Find every record mentioning `keyword` and shape it for display.
///
/// The keyword is trimmed and lowercased first. An empty keyword yields no
/// results.
///
/// # Examples
///
/// ```
/// use content_search::models::{Catalog, Record};
/// use content_search::search;
///
/// let catalog = Catalog::new(vec![Record {
///     title: "AI".to_string(),
///     summary: String::new(),
///     full_content: String::new(),
///     content_type: "blog".to_string(),
///     date: None,
/// }]);
///
/// let results = search(&catalog, "  ai ");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].snippet, "AI...");
/// assert_eq!(results[0].date, "");
/// ```
pub fn search(catalog: &Catalog, keyword: &str) -> Vec<SearchResult> {
    let keyword = normalize_keyword(keyword);
    if keyword.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter_map(|record| {
            matched_field(record, &keyword).map(|field| to_result(record, field))
        })
        .collect()
}

fn to_result(record: &Record, field: MatchedField) -> SearchResult {
    SearchResult {
        title: record.title.clone(),
        content_type: record.content_type.clone(),
        date: record.date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
        snippet: make_snippet(field.text(record)),
    }
}
