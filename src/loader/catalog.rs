use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info, warn};

use super::dates::parse_date;
use crate::errors::LoadError;
use crate::models::{Catalog, Record};

/// Columns every source must provide, in any order
pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "summary", "full_content", "type", "date"];

/// Cell contents read as missing values (pandas' default NA markers)
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &str = "\u{feff}";

/// Positions of the required columns within the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: usize,
    summary: usize,
    full_content: usize,
    content_type: usize,
    date: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &ByteRecord, path: &Path) -> Result<Self, LoadError> {
        if headers.is_empty() {
            return Err(LoadError::malformed(path, "no header row"));
        }

        let names: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let name = String::from_utf8_lossy(raw);
                let name: &str = if i == 0 { name.trim_start_matches(UTF8_BOM) } else { &name };
                name.trim().to_string()
            })
            .collect();

        let find = |column: &str| names.iter().position(|n| n == column);
        let missing: Vec<&str> =
            REQUIRED_COLUMNS.iter().copied().filter(|c| find(*c).is_none()).collect();

        match (find("title"), find("summary"), find("full_content"), find("type"), find("date")) {
            (Some(title), Some(summary), Some(full_content), Some(content_type), Some(date)) => {
                Ok(Self { title, summary, full_content, content_type, date })
            }
            _ => Err(LoadError::malformed(
                path,
                format!("missing required columns: {}", missing.join(", ")),
            )),
        }
    }
}

/// Load a catalog from a CSV file.
///
/// Rows keep their source order. Missing `title`, `summary` and `full_content`
/// cells become empty strings, `type` is lowercased and trimmed, and dates that
/// cannot be parsed are stored as `None`.
///
/// # Errors
///
/// Returns [`LoadError::SourceNotFound`] if the file cannot be opened or read,
/// and [`LoadError::SourceMalformed`] if it has no header row or lacks one of
/// [`REQUIRED_COLUMNS`].
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use content_search::load_catalog;
///
/// let catalog = load_catalog(Path::new("rapyder_content.csv"))?;
/// println!("Loaded {} records", catalog.len());
/// # Ok::<(), content_search::LoadError>(())
/// ```
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::not_found(path, e))?;
    let catalog = read_catalog(file, path)?;
    info!("Loaded {} records from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Build a catalog from any CSV reader. `path` is only used in errors and logs.
pub fn read_catalog<R: Read>(source: R, path: &Path) -> Result<Catalog, LoadError> {
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(source);

    let headers = reader.byte_headers().map_err(|e| csv_error(path, e))?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut records = Vec::new();
    let mut invalid_dates = 0usize;
    let mut row = ByteRecord::new();

    while reader.read_byte_record(&mut row).map_err(|e| csv_error(path, e))? {
        let raw_date = cell(&row, columns.date);
        let date = raw_date.as_deref().and_then(parse_date);
        if let (None, Some(raw)) = (date, raw_date.as_deref()) {
            invalid_dates += 1;
            debug!("Row {}: unparseable date {:?}", records.len() + 1, raw);
        }

        records.push(Record {
            title: cell(&row, columns.title).unwrap_or_default(),
            summary: cell(&row, columns.summary).unwrap_or_default(),
            full_content: cell(&row, columns.full_content).unwrap_or_default(),
            content_type: cell(&row, columns.content_type)
                .map(|t| t.trim().to_lowercase())
                .unwrap_or_default(),
            date,
        });
    }

    if invalid_dates > 0 {
        warn!(
            "{} of {} rows in {} have an unparseable date",
            invalid_dates,
            records.len(),
            path.display()
        );
    }

    Ok(Catalog::new(records))
}

/// Read a cell as text, treating absent cells and NA markers as missing.
fn cell(row: &ByteRecord, idx: usize) -> Option<String> {
    let raw = row.get(idx)?;
    let text = String::from_utf8_lossy(raw);
    if NA_MARKERS.contains(&text.as_ref()) { None } else { Some(text.into_owned()) }
}

/// I/O failures mean the source could not be read; anything else is structural.
fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => LoadError::not_found(path, io_err),
            other => LoadError::malformed(path, format!("{:?}", other)),
        }
    } else {
        LoadError::malformed(path, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str = "title,summary,full_content,type,date\n";

    fn read(content: &str) -> Result<Catalog, LoadError> {
        read_catalog(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_reads_rows_in_order() {
        let csv = format!(
            "{HEADER}First,s1,c1,blog,2023-01-01\n\
             Second,s2,c2,blog,2023-01-02\n\
             Third,s3,c3,blog,2023-01-03\n"
        );
        let catalog = read(&csv).unwrap();
        let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_text_becomes_empty_string() {
        let csv = format!("{HEADER},,,blog,2023-01-01\n");
        let catalog = read(&csv).unwrap();
        let record = &catalog[0];
        assert_eq!(record.title, "");
        assert_eq!(record.summary, "");
        assert_eq!(record.full_content, "");
    }

    #[test]
    fn test_na_markers_are_missing_values() {
        let csv = format!("{HEADER}NA,None,null,NaN,N/A\n");
        let record = &read(&csv).unwrap()[0];
        assert_eq!(record.title, "");
        assert_eq!(record.summary, "");
        assert_eq!(record.full_content, "");
        assert_eq!(record.content_type, "");
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_type_is_lowercased_and_trimmed() {
        let csv = format!("{HEADER}A,,,\"  Case Study \",2023-01-01\nB,,,BLOG,2023-01-01\n");
        let catalog = read(&csv).unwrap();
        assert_eq!(catalog[0].content_type, "case study");
        assert_eq!(catalog[1].content_type, "blog");
    }

    #[test]
    fn test_bad_date_becomes_none() {
        let csv = format!("{HEADER}A,,,blog,not-a-date\nB,,,blog,2023-05-01\nC,,,blog,\n");
        let catalog = read(&csv).unwrap();
        assert_eq!(catalog[0].date, None);
        assert_eq!(catalog[1].date, NaiveDate::from_ymd_opt(2023, 5, 1));
        assert_eq!(catalog[2].date, None);
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let csv = "id,date,type,full_content,author,summary,title\n\
                   7,2023-05-01,Blog,Body,Jane,Short,Heading\n";
        let record = &read(csv).unwrap()[0];
        assert_eq!(record.title, "Heading");
        assert_eq!(record.summary, "Short");
        assert_eq!(record.full_content, "Body");
        assert_eq!(record.content_type, "blog");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 5, 1));
    }

    #[test]
    fn test_header_names_are_trimmed_and_bom_stripped() {
        let csv = "\u{feff}title , summary,full_content,type,date\nA,B,C,blog,2023-05-01\n";
        let record = &read(csv).unwrap()[0];
        assert_eq!(record.title, "A");
        assert_eq!(record.summary, "B");
    }

    #[test]
    fn test_missing_columns_is_malformed() {
        let err = read("title,summary,full_content\nA,B,C\n").unwrap_err();
        match err {
            LoadError::SourceMalformed { reason, .. } => {
                assert!(reason.contains("type"));
                assert!(reason.contains("date"));
                assert!(!reason.contains("title"));
            }
            other => panic!("expected SourceMalformed, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source_is_malformed() {
        let err = read("").unwrap_err();
        assert!(matches!(err, LoadError::SourceMalformed { .. }));
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let catalog = read(HEADER).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_short_and_long_rows_are_tolerated() {
        let csv = format!("{HEADER}Short row,only summary\nLong,s,c,blog,2023-05-01,extra,cells\n");
        let catalog = read(&csv).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].title, "Short row");
        assert_eq!(catalog[0].summary, "only summary");
        assert_eq!(catalog[0].full_content, "");
        assert_eq!(catalog[0].content_type, "");
        assert_eq!(catalog[0].date, None);
        assert_eq!(catalog[1].date, NaiveDate::from_ymd_opt(2023, 5, 1));
    }

    #[test]
    fn test_quoted_multiline_content() {
        let csv =
            format!("{HEADER}\"Title, with comma\",,\"Line one\nLine two\",blog,2023-05-01\n");
        let record = &read(&csv).unwrap()[0];
        assert_eq!(record.title, "Title, with comma");
        assert_eq!(record.full_content, "Line one\nLine two");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"Caf\xe9,,,blog,2023-05-01\n");
        let catalog = read_catalog(bytes.as_slice(), Path::new("latin1.csv")).unwrap();
        assert_eq!(catalog[0].title, "Caf\u{fffd}");
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}Cloud FinOps Guide,,Learn about cloud cost,Blog,2023-05-01")
            .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].content_type, "blog");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("nope.csv")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_catalog_is_idempotent() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{HEADER}A,b,c,Blog,2023-05-01\nD,e,f,Case Study,junk\n").unwrap();

        let first = load_catalog(file.path()).unwrap();
        let second = load_catalog(file.path()).unwrap();
        assert_eq!(first, second);
    }
}
