use serde::{Deserialize, Serialize};

/// Display-ready view of a record that matched a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title in its original casing
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    /// `YYYY-MM-DD`, or empty when the record has no valid date
    pub date: String,
    /// First 100 characters of the matching field followed by `...`
    pub snippet: String,
}
