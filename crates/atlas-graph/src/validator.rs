//! Referential validation
//!
//! Cross-checks every relationship endpoint against the set of known
//! catalog entries. Unlike the parser this never fails fast: the point is
//! an audit that surfaces every dangling reference in a single run.

use std::collections::HashSet;
use std::fmt;

use atlas_domain::{EntityId, Relationship};

/// One dangling endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `from` names an entry that does not exist
    InvalidSource(EntityId),

    /// `to` names an entry that does not exist
    InvalidTarget(EntityId),
}

impl Violation {
    /// The offending identifier
    pub fn id(&self) -> &EntityId {
        match self {
            Violation::InvalidSource(id) | Violation::InvalidTarget(id) => id,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidSource(id) => write!(f, "Invalid source slug: \"{}\"", id),
            Violation::InvalidTarget(id) => write!(f, "Invalid target slug: \"{}\"", id),
        }
    }
}

/// Outcome of a referential audit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether every endpoint resolved to a known entry
    pub valid: bool,

    /// Every violation, in relationship order, one per occurrence
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Violation messages, one per occurrence (no deduplication)
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// Distinct invalid source ids, in first-seen order
    ///
    /// The grouped accessors deduplicate per identifier for reporting; the
    /// raw `violations` list does not.
    pub fn invalid_sources(&self) -> Vec<&EntityId> {
        self.grouped(|v| matches!(v, Violation::InvalidSource(_)))
    }

    /// Distinct invalid target ids, in first-seen order
    pub fn invalid_targets(&self) -> Vec<&EntityId> {
        self.grouped(|v| matches!(v, Violation::InvalidTarget(_)))
    }

    fn grouped<F>(&self, pick: F) -> Vec<&EntityId>
    where
        F: Fn(&Violation) -> bool,
    {
        let mut seen: HashSet<&EntityId> = HashSet::new();
        let mut out = Vec::new();

        for violation in self.violations.iter().filter(|v| pick(v)) {
            let id = violation.id();
            if seen.insert(id) {
                out.push(id);
            }
        }

        out
    }
}

/// Audit every relationship endpoint against the known entries
///
/// Walks the whole list and records one violation per offending endpoint
/// occurrence. Never fails: dangling references are findings, not errors —
/// a single run reports every problem in the file.
pub fn validate_relationships(
    relationships: &[Relationship],
    known: &HashSet<EntityId>,
) -> ValidationReport {
    let mut violations = Vec::new();

    for rel in relationships {
        if !known.contains(&rel.from) {
            violations.push(Violation::InvalidSource(rel.from.clone()));
        }
        if !known.contains(&rel.to) {
            violations.push(Violation::InvalidTarget(rel.to.clone()));
        }
    }

    ValidationReport {
        valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::RelationshipType;

    fn id(s: &str) -> EntityId {
        EntityId::new(s).unwrap()
    }

    fn rel(from: &str, to: &str) -> Relationship {
        Relationship::new(id(from), id(to), RelationshipType::Solves, false)
    }

    fn known(ids: &[&str]) -> HashSet<EntityId> {
        ids.iter().map(|s| id(s)).collect()
    }

    #[test]
    fn test_all_valid() {
        let rels = vec![rel("patterns/a", "obstacles/b"), rel("patterns/c", "patterns/a")];
        let set = known(&["patterns/a", "obstacles/b", "patterns/c"]);

        let report = validate_relationships(&rels, &set);
        assert!(report.valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_invalid_source() {
        let rels = vec![rel("patterns/nonexistent", "obstacles/b")];
        let set = known(&["obstacles/b"]);

        let report = validate_relationships(&rels, &set);
        assert!(!report.valid);
        assert_eq!(
            report.errors(),
            vec!["Invalid source slug: \"patterns/nonexistent\""]
        );
    }

    #[test]
    fn test_invalid_target() {
        let rels = vec![rel("patterns/a", "obstacles/nonexistent")];
        let set = known(&["patterns/a"]);

        let report = validate_relationships(&rels, &set);
        assert!(!report.valid);
        assert_eq!(
            report.errors(),
            vec!["Invalid target slug: \"obstacles/nonexistent\""]
        );
    }

    #[test]
    fn test_both_endpoints_invalid() {
        let rels = vec![rel("patterns/x", "obstacles/y")];
        let report = validate_relationships(&rels, &HashSet::new());

        assert_eq!(report.violations.len(), 2);
        assert!(matches!(report.violations[0], Violation::InvalidSource(_)));
        assert!(matches!(report.violations[1], Violation::InvalidTarget(_)));
    }

    #[test]
    fn test_occurrences_are_not_deduplicated() {
        let rels = vec![
            rel("patterns/ghost", "obstacles/b"),
            rel("patterns/ghost", "patterns/a"),
        ];
        let set = known(&["obstacles/b", "patterns/a"]);

        let report = validate_relationships(&rels, &set);
        assert_eq!(report.violations.len(), 2);
    }

    #[test]
    fn test_grouped_accessors_deduplicate() {
        let rels = vec![
            rel("patterns/ghost", "obstacles/gone"),
            rel("patterns/ghost", "obstacles/gone"),
            rel("patterns/other", "obstacles/gone"),
        ];
        let report = validate_relationships(&rels, &HashSet::new());

        let sources = report.invalid_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], &id("patterns/ghost"));
        assert_eq!(sources[1], &id("patterns/other"));

        let targets = report.invalid_targets();
        assert_eq!(targets, vec![&id("obstacles/gone")]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let report = validate_relationships(&[], &HashSet::new());
        assert!(report.valid);
    }
}
