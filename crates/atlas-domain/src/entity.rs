//! Entity identifiers

use std::fmt;
use std::str::FromStr;

use crate::Category;

/// Identifier for one catalog entry
///
/// Uses a slash-delimited composite: `<category>/<slug>`, e.g.
/// `patterns/active-partner`. Only ASCII alphanumerics, `/`, `_` and `-`
/// are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    /// Create a new entity id
    ///
    /// # Errors
    /// Returns an error if the id is empty or contains a character outside
    /// `[A-Za-z0-9/_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.is_empty() {
            return Err("Entity id cannot be empty".to_string());
        }

        if let Some(bad) = value.chars().find(|c| !is_id_char(*c)) {
            return Err(format!("Invalid character '{}' in entity id '{}'", bad, value));
        }

        Ok(Self(value))
    }

    /// Get the full id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category this entry belongs to
    ///
    /// Resolved from the leading path segment. Ids with an unknown prefix
    /// are treated as patterns; referential validation is where unknown ids
    /// actually get rejected.
    pub fn category(&self) -> Category {
        let prefix = self.0.split('/').next().unwrap_or("");
        Category::parse(prefix).unwrap_or(Category::Patterns)
    }

    /// The bare slug (last path segment)
    pub fn slug(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::new(s)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Characters allowed in an entity id
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '/' || c == '_' || c == '-'
}
