//! Per-source catalog cache with staleness detection

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::{debug, info};

use super::catalog::load_catalog;
use crate::errors::LoadError;
use crate::models::Catalog;

/// File length and modification time of a source at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSignature {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl SourceSignature {
    /// Read the current signature of a source file
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        Ok(Self { len: metadata.len(), modified: metadata.modified().ok() })
    }

    /// Check if the file has changed (length or mtime differs)
    pub fn is_stale(&self, path: &Path) -> io::Result<bool> {
        Ok(*self != Self::from_path(path)?)
    }
}

#[derive(Debug, Clone)]
struct CachedCatalog {
    signature: SourceSignature,
    catalog: Catalog,
}

/// Loaded catalogs keyed by canonical source path.
///
/// A cached catalog is returned as long as the source's [`SourceSignature`] is
/// unchanged. When the file changes, a brand-new [`Catalog`] is loaded and
/// replaces the entry; catalogs already handed out are left untouched.
#[derive(Debug, Default)]
pub struct CatalogCache {
    entries: HashMap<PathBuf, CachedCatalog>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the catalog for `path`, loading it if missing or stale.
    ///
    /// # Errors
    ///
    /// Propagates [`LoadError`] from the loader. A source that has disappeared
    /// or become malformed is evicted from the cache.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Catalog, LoadError> {
        let key = cache_key(path);

        let signature = match SourceSignature::from_path(path) {
            Ok(signature) => signature,
            Err(e) => {
                if self.entries.remove(&key).is_some() {
                    info!("Source {} is gone, evicted cached catalog", path.display());
                }
                return Err(LoadError::not_found(path, e));
            }
        };

        if let Some(cached) = self.entries.get(&key) {
            if cached.signature == signature {
                debug!("Catalog cache hit for {}", path.display());
                return Ok(cached.catalog.clone());
            }
            info!("Source {} changed, reloading catalog", path.display());
        }

        match load_catalog(path) {
            Ok(catalog) => {
                self.entries.insert(key, CachedCatalog { signature, catalog: catalog.clone() });
                Ok(catalog)
            }
            Err(e) => {
                self.entries.remove(&key);
                Err(e)
            }
        }
    }

    /// Whether the cached entry for `path` no longer matches the file on disk.
    /// Paths that are not cached count as stale.
    pub fn is_stale(&self, path: &Path) -> bool {
        match self.entries.get(&cache_key(path)) {
            Some(cached) => cached.signature.is_stale(path).unwrap_or(true),
            None => true,
        }
    }

    /// Drop the cached catalog for `path`. Returns whether an entry was removed.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let removed = self.entries.remove(&cache_key(path)).is_some();
        if removed {
            info!("Invalidated cached catalog for {}", path.display());
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonicalize so `./a.csv` and `/abs/a.csv` share an entry. A file that no
/// longer exists keys on its canonical parent plus file name, so eviction still
/// finds the entry it was stored under.
fn cache_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
