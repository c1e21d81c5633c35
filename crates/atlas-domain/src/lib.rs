//! Atlas Domain Layer
//!
//! This crate contains the core domain model for the atlas catalog. It has
//! ZERO external dependencies and defines the fundamental concepts and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Category**: The three kinds of catalog entry (patterns, anti-patterns,
//!   obstacles)
//! - **EntityId**: Slash-delimited composite identifier (`category/slug`)
//! - **RelationshipType**: The closed set of edge types, with their
//!   symmetric/asymmetric classification and display labels
//! - **Relationship**: One directed, typed edge between two entries
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain model only
//! - The notation parser, graph store, and catalog implementations live in
//!   other crates
//! - Trait definitions for all external collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod entity;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use entity::EntityId;
pub use relationship::{Relationship, RelationshipType};
pub use traits::TitleSource;
