//! Catalog error types

use std::path::PathBuf;

use atlas_domain::Category;
use thiserror::Error;

/// Errors that can occur while scanning the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Documents directory could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A category directory is missing from the documents root
    #[error("Category directory not found: {}", .path.display())]
    MissingCategory {
        /// The category whose directory is absent
        category: Category,

        /// The path that was expected to exist
        path: PathBuf,
    },
}
