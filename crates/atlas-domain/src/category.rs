//! Catalog categories

use std::fmt;

/// The three kinds of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Practices worth repeating
    Patterns,

    /// Practices that look helpful but backfire
    AntiPatterns,

    /// Difficulties the patterns exist to address
    Obstacles,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 3] = [
        Category::Patterns,
        Category::AntiPatterns,
        Category::Obstacles,
    ];

    /// The directory / URL segment for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Patterns => "patterns",
            Category::AntiPatterns => "anti-patterns",
            Category::Obstacles => "obstacles",
        }
    }

    /// Parse a category from its string form
    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "patterns" => Some(Category::Patterns),
            "anti-patterns" => Some(Category::AntiPatterns),
            "obstacles" => Some(Category::Obstacles),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_string() {
        assert_eq!(Category::parse("essays"), None);
        assert_eq!(Category::parse("Patterns"), None);
        assert_eq!(Category::parse(""), None);
    }
}
