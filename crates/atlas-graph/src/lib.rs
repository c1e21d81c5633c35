//! Atlas Graph Engine
//!
//! Reads the relationship notation file, validates it, and exposes query,
//! audit, and visualization views over the resulting graph.
//!
//! The engine provides:
//! - Notation parsing (fail-fast on any grammar or type violation)
//! - A single-parse-per-lifetime graph store with point queries
//! - Referential auditing against the known catalog (batched, never throws)
//! - Node/link projection for the interactive graph view
//!
//! # Examples
//!
//! ```no_run
//! use atlas_graph::{FileSource, GraphStore};
//!
//! let store = GraphStore::new(FileSource::new("documents/relationships.mmd"));
//! let relationships = store.get_all()?;
//! # Ok::<(), atlas_graph::GraphError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod parser;
pub mod store;
pub mod validator;
pub mod viz;

pub use error::GraphError;
pub use parser::parse;
pub use store::{FileSource, GraphStore, RelationshipSource};
pub use validator::{validate_relationships, ValidationReport, Violation};
pub use viz::{project, GraphData, GraphLink, GraphNode};
