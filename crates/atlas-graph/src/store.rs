//! Graph store
//!
//! Loads the notation file once, caches the parsed relationship list for
//! the lifetime of the store, and answers point queries against it.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use atlas_domain::{EntityId, Relationship};
use tracing::debug;

use crate::error::GraphError;
use crate::parser;

/// Source of the raw notation text
///
/// The store's only side effect goes through this seam; tests substitute
/// in-memory and call-counting implementations.
pub trait RelationshipSource {
    /// Read the full notation text
    fn load(&self) -> io::Result<String>;
}

/// Notation file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RelationshipSource for FileSource {
    fn load(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

/// Cached, read-only view of the relationship graph
///
/// The source is read and parsed at most once per store lifetime; every
/// query after the first is a pure lookup over the cached list.
/// [`GraphStore::clear_cache`] forces the next query to start over. Load
/// and parse failures are not cached: a broken notation file keeps
/// failing until it is fixed.
///
/// The graph is read-only at runtime; editing happens in the notation
/// file, outside this process.
pub struct GraphStore<S: RelationshipSource> {
    source: S,
    cache: Mutex<Option<Arc<Vec<Relationship>>>>,
}

impl<S: RelationshipSource> GraphStore<S> {
    /// Create a store over the given source
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    /// The full relationship list, in file order
    ///
    /// Reads and parses the source on the first call, then serves the
    /// cached list.
    ///
    /// # Errors
    /// [`GraphError::Io`] if the source cannot be read; parser errors
    /// propagate unchanged.
    pub fn get_all(&self) -> Result<Arc<Vec<Relationship>>, GraphError> {
        let mut cache = self.lock_cache();

        if let Some(cached) = cache.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let content = self.source.load()?;
        let relationships = Arc::new(parser::parse(&content)?);
        debug!("Parsed {} relationships from notation", relationships.len());

        *cache = Some(Arc::clone(&relationships));
        Ok(relationships)
    }

    /// Relationships with the given entry as source, in file order
    pub fn outgoing(&self, id: &EntityId) -> Result<Vec<Relationship>, GraphError> {
        let all = self.get_all()?;
        Ok(all.iter().filter(|rel| &rel.from == id).cloned().collect())
    }

    /// Relationships touching the given entry on either side, in file order
    ///
    /// No deduplication: a bidirectional pair touching the entry on both
    /// sides contributes two records.
    pub fn incident_to_either(&self, id: &EntityId) -> Result<Vec<Relationship>, GraphError> {
        let all = self.get_all()?;
        Ok(all
            .iter()
            .filter(|rel| &rel.from == id || &rel.to == id)
            .cloned()
            .collect())
    }

    /// Drop the cached list; the next query re-reads the source
    ///
    /// Testing hook, also useful after the notation file is edited.
    pub fn clear_cache(&self) {
        let mut cache = self.lock_cache();
        *cache = None;
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<Arc<Vec<Relationship>>>> {
        // The system is single-threaded; the mutex only exists to give the
        // store a `&self` API. Recover rather than panic on poison.
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
