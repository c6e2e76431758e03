use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Catalog;

/// Summary figures for the `stats` command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    /// Entry count per normalized type; untyped entries are keyed by ""
    pub by_type: BTreeMap<String, usize>,
    /// Entries whose date was missing or unparseable
    pub undated: usize,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut stats = Self { total: catalog.len(), ..Self::default() };

        for record in catalog {
            *stats.by_type.entry(record.content_type.clone()).or_default() += 1;

            match record.date {
                Some(date) => {
                    stats.earliest = Some(stats.earliest.map_or(date, |d| d.min(date)));
                    stats.latest = Some(stats.latest.map_or(date, |d| d.max(date)));
                }
                None => stats.undated += 1,
            }
        }

        stats
    }
}
