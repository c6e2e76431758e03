//! Load-time error taxonomy.
//!
//! Only structural problems with the source are errors. Row-level anomalies
//! (missing text, unparseable dates) are repaired by the loader and never
//! surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be located or read.
    #[error("source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source is readable but lacks the required structure.
    #[error("malformed source {}: {reason}", path.display())]
    SourceMalformed { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SourceNotFound { path: path.into(), source }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceMalformed { path: path.into(), reason: reason.into() }
    }

    /// Path of the source that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound { path, .. } | Self::SourceMalformed { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}
