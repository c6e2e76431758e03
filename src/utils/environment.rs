use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the catalog CSV
pub const SOURCE_ENV_VAR: &str = "CONTENT_SEARCH_SOURCE";

/// Catalog file looked up in the working directory when nothing else is set
pub const DEFAULT_SOURCE: &str = "rapyder_content.csv";

/// Resolve the catalog path: explicit flag, then `CONTENT_SEARCH_SOURCE`, then
/// `rapyder_content.csv` in the working directory.
pub fn resolve_source_path(flag: Option<&Path>) -> PathBuf {
    source_path_from(flag, env::var_os(SOURCE_ENV_VAR))
}

fn source_path_from(flag: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_SOURCE),
    }
}
