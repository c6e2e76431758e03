use std::ops::Index;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single catalog entry (one row of the source CSV).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub summary: String,
    pub full_content: String,
    /// Lowercased, trimmed `type` column (e.g. "blog", "case study")
    #[serde(rename = "type")]
    pub content_type: String,
    /// `None` when the source date was empty or unparseable
    pub date: Option<NaiveDate>,
}

/// Ordered, immutable collection of records.
///
/// Cloning is cheap and shares the underlying storage, so a catalog can be
/// handed to several readers. Reloading a source always produces a new
/// `Catalog` rather than mutating an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    records: Arc<[Record]>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records: records.into() }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether two handles point at the same loaded instance
    pub fn ptr_eq(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl From<Vec<Record>> for Catalog {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl Index<usize> for Catalog {
    type Output = Record;

    fn index(&self, idx: usize) -> &Record {
        &self.records[idx]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
