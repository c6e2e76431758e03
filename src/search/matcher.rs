use crate::models::Record;

/// Searchable text fields, in snippet priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    Title,
    Summary,
    FullContent,
}

impl MatchedField {
    pub const PRIORITY: [MatchedField; 3] =
        [MatchedField::Title, MatchedField::Summary, MatchedField::FullContent];

    /// The field's text on a record, in its original casing
    pub fn text(self, record: &Record) -> &str {
        match self {
            MatchedField::Title => &record.title,
            MatchedField::Summary => &record.summary,
            MatchedField::FullContent => &record.full_content,
        }
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// First field (title, then summary, then full content) whose lowercased text
/// contains `keyword`. `keyword` must already be normalized.
pub fn matched_field(record: &Record, keyword: &str) -> Option<MatchedField> {
    MatchedField::PRIORITY
        .into_iter()
        .find(|field| field.text(record).to_lowercase().contains(keyword))
}
