//! Trait seams for external collaborators

use std::collections::HashMap;

use crate::EntityId;

/// Source of human-readable display titles
///
/// Implementations must degrade gracefully: a missing or unreadable entry
/// yields `None`, never an error. Consumers fall back to the raw slug.
pub trait TitleSource {
    /// Display title for an entry, if one is known
    fn title(&self, id: &EntityId) -> Option<String>;
}

impl TitleSource for HashMap<EntityId, String> {
    fn title(&self, id: &EntityId) -> Option<String> {
        self.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_title_source() {
        let id = EntityId::new("patterns/active-partner").unwrap();
        let mut titles = HashMap::new();
        titles.insert(id.clone(), "Active Partner".to_string());

        assert_eq!(titles.title(&id), Some("Active Partner".to_string()));

        let missing = EntityId::new("patterns/absent").unwrap();
        assert_eq!(titles.title(&missing), None);
    }
}
