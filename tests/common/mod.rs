//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const SOURCE_FILENAME: &str = "rapyder_content.csv";
pub const HEADER: &str = "title,summary,full_content,type,date";

/// A catalog CSV inside a temporary directory (removed on drop)
pub struct TestSource {
    dir: TempDir,
    path: PathBuf,
}

impl TestSource {
    /// Path of the CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the CSV file
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Replace the file contents
    pub fn rewrite(&self, content: &str) {
        fs::write(&self.path, content).expect("Failed to rewrite catalog");
    }
}

/// Builder for catalog CSV files
pub struct CatalogFileBuilder {
    header: String,
    rows: Vec<String>,
    raw: Option<Vec<u8>>,
}

impl CatalogFileBuilder {
    /// Start with the standard header and no rows
    pub fn new() -> Self {
        Self { header: HEADER.to_string(), rows: Vec::new(), raw: None }
    }

    /// Use a custom header line
    pub fn header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    /// Append a literal CSV line
    pub fn with_line(mut self, line: &str) -> Self {
        self.rows.push(line.to_string());
        self
    }

    /// Append rows built programmatically
    pub fn with_rows(mut self, rows: &[RowBuilder]) -> Self {
        self.rows.extend(rows.iter().map(|r| r.to_csv()));
        self
    }

    /// Ignore header and rows and write these exact bytes
    pub fn with_raw(mut self, bytes: &[u8]) -> Self {
        self.raw = Some(bytes.to_vec());
        self
    }

    pub fn build(self) -> TestSource {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(SOURCE_FILENAME);

        let bytes = match self.raw {
            Some(bytes) => bytes,
            None => {
                let mut content = self.header;
                content.push('\n');
                for row in &self.rows {
                    content.push_str(row);
                    content.push('\n');
                }
                content.into_bytes()
            }
        };
        fs::write(&path, bytes).expect("Failed to write catalog");

        TestSource { dir, path }
    }
}

impl Default for CatalogFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one catalog row in the standard column order
#[derive(Clone)]
pub struct RowBuilder {
    title: String,
    summary: String,
    full_content: String,
    content_type: String,
    date: String,
}

impl RowBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            summary: String::new(),
            full_content: String::new(),
            content_type: "blog".to_string(),
            date: "2023-01-01".to_string(),
        }
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn content(mut self, full_content: &str) -> Self {
        self.full_content = full_content.to_string();
        self
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Render as a CSV line, quoting fields where needed
    pub fn to_csv(&self) -> String {
        [&self.title, &self.summary, &self.full_content, &self.content_type, &self.date]
            .iter()
            .map(|field| quote(field))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// A small catalog resembling real blog / case study data
pub fn realistic_catalog() -> TestSource {
    CatalogFileBuilder::new()
        .with_rows(&[
            RowBuilder::new("Cloud FinOps Guide")
                .content("Learn about cloud cost optimization, budgets and forecasting.")
                .content_type("Blog")
                .date("2023-05-01"),
            RowBuilder::new("Other").content_type("case study").date("bad-date"),
            RowBuilder::new("Migrating a Retailer to AWS")
                .summary("How a retail chain moved 200 workloads to the cloud")
                .content("The migration covered compute, storage and data pipelines.")
                .content_type(" Case Study ")
                .date("2022-11-20"),
            RowBuilder::new("Generative AI on Bedrock")
                .summary("Building assistants with managed foundation models")
                .content("We compare prompt engineering, RAG and fine-tuning.")
                .content_type("BLOG")
                .date("March 3, 2024"),
            RowBuilder::new("Kubernetes Cost Controls")
                .summary("Right-sizing clusters")
                .content("FinOps practices for EKS: requests, limits and spot capacity.")
                .content_type("blog")
                .date(""),
        ])
        .build()
}
