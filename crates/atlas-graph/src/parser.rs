//! Notation parser
//!
//! Turns the raw text of the relationship notation file into an ordered
//! list of directed [`Relationship`] records. The format is one directive
//! or edge per line:
//!
//! ```text
//! graph TD
//! %% cross-category edges
//! patterns/active-partner -->|solves| obstacles/black-box-ai
//! patterns/active-partner <-->|related| patterns/chain-of-small-steps
//! ```
//!
//! The grammar is a closed table of line kinds with explicit precedence:
//! blank, comment, declaration, bidirectional edge, unidirectional edge.
//! Any line matching none of them fails the whole parse; there is no
//! partial result.

use atlas_domain::{EntityId, Relationship, RelationshipType};

use crate::error::GraphError;

const COMMENT_MARKER: &str = "%%";
const DECLARATION_PREFIX: &str = "graph ";
const BI_ARROW: &str = "<-->";
const UNI_ARROW: &str = "-->";

/// One classified line of notation
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Empty once trimmed
    Blank,

    /// Starts with `%%`
    Comment,

    /// The `graph ...` declaration (expected once, position not enforced)
    Declaration,

    /// An edge, not yet checked against the type registry
    Edge {
        from: &'a str,
        kind: &'a str,
        to: &'a str,
        bidirectional: bool,
    },
}

/// Parse the full notation text into relationship records
///
/// Records come back in file order. A bidirectional line expands into two
/// records, one per direction, both flagged `bidirectional`. The first
/// grammar or type violation aborts the parse.
///
/// # Errors
/// [`GraphError::MalformedLine`] for a line matching no known line kind,
/// [`GraphError::UnknownType`] for a type token outside the registry. Both
/// carry the 1-based line number.
pub fn parse(content: &str) -> Result<Vec<Relationship>, GraphError> {
    let mut relationships = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        let classified = classify(line).ok_or_else(|| GraphError::MalformedLine {
            line: number,
            text: line.to_string(),
        })?;

        match classified {
            Line::Blank | Line::Comment | Line::Declaration => continue,
            Line::Edge {
                from,
                kind,
                to,
                bidirectional,
            } => {
                let kind = RelationshipType::parse_token(kind).ok_or_else(|| {
                    GraphError::UnknownType {
                        line: number,
                        token: kind.to_string(),
                        valid: RelationshipType::valid_tokens(),
                    }
                })?;

                let from = entity(from, number, line)?;
                let to = entity(to, number, line)?;

                let forward = Relationship::new(from, to, kind, bidirectional);
                if bidirectional {
                    // Both directions carry the type verbatim, asymmetric
                    // types included; see `Relationship` for the caveat.
                    let reverse = forward.reversed();
                    relationships.push(forward);
                    relationships.push(reverse);
                } else {
                    relationships.push(forward);
                }
            }
        }
    }

    Ok(relationships)
}

/// Classify one trimmed line, in precedence order
///
/// `None` means the line matched nothing and the parse must fail.
fn classify(line: &str) -> Option<Line<'_>> {
    if line.is_empty() {
        return Some(Line::Blank);
    }

    if line.starts_with(COMMENT_MARKER) {
        return Some(Line::Comment);
    }

    if line.starts_with(DECLARATION_PREFIX) {
        return Some(Line::Declaration);
    }

    edge(line)
}

/// Parse an edge line: `SOURCE --> |TYPE| TARGET` or `SOURCE <--> |TYPE| TARGET`
///
/// Whitespace is required between SOURCE and the arrow (`-` is a legal
/// identifier character, so `a-->b` is malformed rather than an edge) and
/// optional everywhere else. The type token is whatever sits between the
/// first two `|`, trimmed; an empty `||` is malformed.
fn edge(line: &str) -> Option<Line<'_>> {
    let open = line.find('|')?;
    let close = open + 1 + line[open + 1..].find('|')?;
    if close == open + 1 {
        return None;
    }

    let head = line[..open].trim_end();
    let kind = line[open + 1..close].trim();
    let to = line[close + 1..].trim();

    // `<-->` must be tried first: `-->` is a suffix of it.
    let (source_part, bidirectional) = if let Some(rest) = head.strip_suffix(BI_ARROW) {
        (rest, true)
    } else if let Some(rest) = head.strip_suffix(UNI_ARROW) {
        (rest, false)
    } else {
        return None;
    };

    let from = source_part.trim_end();
    if from.len() == source_part.len() {
        // Nothing separated the source from the arrow.
        return None;
    }

    if !is_id_token(from) || !is_id_token(to) {
        return None;
    }

    Some(Line::Edge {
        from,
        kind,
        to,
        bidirectional,
    })
}

/// Whether a token is a plausible entity id (non-empty, `[A-Za-z0-9/_-]+`)
fn is_id_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '/' || c == '_' || c == '-')
}

fn entity(token: &str, line: usize, text: &str) -> Result<EntityId, GraphError> {
    // `edge` has already vetted the charset, so this cannot fail in
    // practice; map the impossible case to a grammar error anyway.
    EntityId::new(token).map_err(|_| GraphError::MalformedLine {
        line,
        text: text.to_string(),
    })
}
