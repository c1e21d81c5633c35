//! Engine error types

use thiserror::Error;

/// Errors that can occur while loading or parsing the relationship notation
///
/// All of these are fatal: a notation file that cannot be read or parsed
/// leaves the graph unusable. Referential problems are not errors at this
/// level; they come back as a [`crate::ValidationReport`].
#[derive(Error, Debug)]
pub enum GraphError {
    /// Notation file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line matched none of the known line kinds
    #[error("Malformed relationship line {line}: \"{text}\". Expected \"A --> |type| B\" or \"A <--> |type| B\"")]
    MalformedLine {
        /// 1-based line number
        line: usize,

        /// The trimmed offending line
        text: String,
    },

    /// An edge carried a type token outside the registry
    #[error("Invalid relationship type \"{token}\" on line {line}. Valid types are: {valid}")]
    UnknownType {
        /// 1-based line number
        line: usize,

        /// The offending token
        token: String,

        /// Comma-separated list of valid tokens
        valid: String,
    },
}
