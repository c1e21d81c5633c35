//! Relationship types and records

use std::fmt;

use crate::EntityId;

/// Type of relationship between two catalog entries
///
/// This is the single source of truth for the valid notation tokens. The
/// parser, the validator, and every display surface consult this enum, so
/// adding a token is a compile-visible change in all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    /// General association (symmetric)
    Related,

    /// One entry addresses an obstacle
    Solves,

    /// Two entries that resemble each other (symmetric)
    Similar,

    /// One entry makes another workable
    Enables,

    /// One entry builds on another
    Uses,

    /// One entry brings an obstacle about
    Causes,

    /// One entry can stand in for the other (symmetric)
    Alternative,
}

impl RelationshipType {
    /// Every valid type, in token order
    pub const ALL: [RelationshipType; 7] = [
        RelationshipType::Related,
        RelationshipType::Solves,
        RelationshipType::Similar,
        RelationshipType::Enables,
        RelationshipType::Uses,
        RelationshipType::Causes,
        RelationshipType::Alternative,
    ];

    /// The token as written in the notation file
    pub fn token(&self) -> &'static str {
        match self {
            RelationshipType::Related => "related",
            RelationshipType::Solves => "solves",
            RelationshipType::Similar => "similar",
            RelationshipType::Enables => "enables",
            RelationshipType::Uses => "uses",
            RelationshipType::Causes => "causes",
            RelationshipType::Alternative => "alternative",
        }
    }

    /// Parse a notation token
    pub fn parse_token(value: &str) -> Option<RelationshipType> {
        match value {
            "related" => Some(RelationshipType::Related),
            "solves" => Some(RelationshipType::Solves),
            "similar" => Some(RelationshipType::Similar),
            "enables" => Some(RelationshipType::Enables),
            "uses" => Some(RelationshipType::Uses),
            "causes" => Some(RelationshipType::Causes),
            "alternative" => Some(RelationshipType::Alternative),
            _ => None,
        }
    }

    /// Whether the meaning is unchanged when read from the target side
    pub fn is_symmetric(&self) -> bool {
        match self {
            RelationshipType::Related
            | RelationshipType::Similar
            | RelationshipType::Alternative => true,
            RelationshipType::Solves
            | RelationshipType::Enables
            | RelationshipType::Uses
            | RelationshipType::Causes => false,
        }
    }

    /// Display label read from the source side
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipType::Related => "Related",
            RelationshipType::Solves => "Solves",
            RelationshipType::Similar => "Similar",
            RelationshipType::Enables => "Enables",
            RelationshipType::Uses => "Uses",
            RelationshipType::Causes => "Causes",
            RelationshipType::Alternative => "Alternative",
        }
    }

    /// Display label read from the target side
    ///
    /// Symmetric types keep their single label; asymmetric types flip to
    /// the inverse reading.
    pub fn reverse_label(&self) -> &'static str {
        match self {
            RelationshipType::Related => "Related",
            RelationshipType::Similar => "Similar",
            RelationshipType::Alternative => "Alternative",
            RelationshipType::Solves => "Solved by",
            RelationshipType::Enables => "Enabled by",
            RelationshipType::Uses => "Used by",
            RelationshipType::Causes => "Caused by",
        }
    }

    /// Label for one traversal direction
    pub fn label_for_direction(&self, outgoing: bool) -> &'static str {
        if outgoing {
            self.label()
        } else {
            self.reverse_label()
        }
    }

    /// Comma-separated list of every valid token, for error messages
    pub fn valid_tokens() -> String {
        RelationshipType::ALL
            .iter()
            .map(|t| t.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A directed, typed edge between two catalog entries
///
/// Every record is directed. A bidirectional notation line expands into two
/// records, one per direction, both flagged `bidirectional`. The expansion
/// copies the type verbatim, so `a <--> |solves| b` yields a reverse record
/// that reads "b solves a" — the notation admits this today; whether that is
/// an assertion or a modeling gap is an open question in the notation
/// itself, so it is preserved rather than rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Source entry
    pub from: EntityId,

    /// Target entry
    pub to: EntityId,

    /// Type of relationship
    pub kind: RelationshipType,

    /// Whether this record came from a bidirectional notation line
    pub bidirectional: bool,
}

impl Relationship {
    /// Create a new relationship
    pub fn new(from: EntityId, to: EntityId, kind: RelationshipType, bidirectional: bool) -> Self {
        Self {
            from,
            to,
            kind,
            bidirectional,
        }
    }

    /// The same relationship read in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            kind: self.kind,
            bidirectional: self.bidirectional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for kind in RelationshipType::ALL {
            assert_eq!(RelationshipType::parse_token(kind.token()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(RelationshipType::parse_token("conflicts"), None);
        assert_eq!(RelationshipType::parse_token("Solves"), None);
        assert_eq!(RelationshipType::parse_token(""), None);
    }

    #[test]
    fn test_symmetry_classification() {
        assert!(RelationshipType::Related.is_symmetric());
        assert!(RelationshipType::Similar.is_symmetric());
        assert!(RelationshipType::Alternative.is_symmetric());

        assert!(!RelationshipType::Solves.is_symmetric());
        assert!(!RelationshipType::Enables.is_symmetric());
        assert!(!RelationshipType::Uses.is_symmetric());
        assert!(!RelationshipType::Causes.is_symmetric());
    }

    #[test]
    fn test_symmetric_labels_match_both_directions() {
        for kind in RelationshipType::ALL.iter().filter(|k| k.is_symmetric()) {
            assert_eq!(kind.label(), kind.reverse_label());
        }
    }

    #[test]
    fn test_asymmetric_labels_flip() {
        assert_eq!(RelationshipType::Solves.label_for_direction(true), "Solves");
        assert_eq!(
            RelationshipType::Solves.label_for_direction(false),
            "Solved by"
        );
        assert_eq!(
            RelationshipType::Causes.label_for_direction(false),
            "Caused by"
        );
    }

    #[test]
    fn test_valid_tokens_lists_all_seven() {
        let listed = RelationshipType::valid_tokens();
        assert_eq!(
            listed,
            "related, solves, similar, enables, uses, causes, alternative"
        );
    }

    #[test]
    fn test_reversed_swaps_endpoints() {
        let rel = Relationship::new(
            EntityId::new("patterns/a").unwrap(),
            EntityId::new("obstacles/b").unwrap(),
            RelationshipType::Solves,
            true,
        );
        let rev = rel.reversed();

        assert_eq!(rev.from, rel.to);
        assert_eq!(rev.to, rel.from);
        assert_eq!(rev.kind, rel.kind);
        assert!(rev.bidirectional);
    }
}
