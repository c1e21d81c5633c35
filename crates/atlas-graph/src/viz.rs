//! Visualization projection
//!
//! Folds the relationship list into the node/link view a force-directed
//! renderer consumes. The projection is recomputed on every call from the
//! cached relationship list; it holds no state of its own.

use std::collections::{HashMap, HashSet};

use atlas_domain::{EntityId, Relationship, TitleSource};
use serde::Serialize;

/// One node of the rendered graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Full entity id
    pub id: String,

    /// Display title, or the raw slug when no title is known
    pub name: String,

    /// Category segment of the id
    pub category: String,

    /// Number of relationships with this node as source
    ///
    /// Deliberately not total degree: appearances as target do not count.
    pub connections: usize,
}

/// One rendered link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    /// Source entity id
    pub source: String,

    /// Target entity id
    pub target: String,

    /// Relationship type token
    #[serde(rename = "type")]
    pub kind: String,
}

/// The complete view for the interactive graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct GraphData {
    /// Nodes, in first-encounter order
    pub nodes: Vec<GraphNode>,

    /// Deduplicated links, in first-encounter order
    pub links: Vec<GraphLink>,
}

/// Project the relationship list into nodes and links
///
/// Nodes are created on first encounter of each endpoint; the display name
/// comes from `titles`, falling back to the raw slug — a missing title
/// never fails the projection. Links deduplicate on the unordered endpoint
/// pair for bidirectional records (the two expanded directions collapse
/// into one link) and on the ordered pair otherwise (two opposite
/// unidirectional edges stay distinct).
pub fn project(relationships: &[Relationship], titles: &impl TitleSource) -> GraphData {
    let mut node_index: HashMap<EntityId, usize> = HashMap::new();
    let mut nodes: Vec<GraphNode> = Vec::new();

    for rel in relationships {
        for id in [&rel.from, &rel.to] {
            if !node_index.contains_key(id) {
                let name = titles
                    .title(id)
                    .unwrap_or_else(|| id.slug().to_string());

                node_index.insert(id.clone(), nodes.len());
                nodes.push(GraphNode {
                    id: id.as_str().to_string(),
                    name,
                    category: id.category().as_str().to_string(),
                    connections: 0,
                });
            }
        }

        if let Some(&index) = node_index.get(&rel.from) {
            nodes[index].connections += 1;
        }
    }

    let mut seen: HashSet<(EntityId, EntityId)> = HashSet::new();
    let mut links: Vec<GraphLink> = Vec::new();

    for rel in relationships {
        // The first record under a key wins, its type included; if the two
        // directions of a pair ever arrive with different types, whichever
        // is processed first is the one rendered.
        let key = if rel.bidirectional {
            let mut pair = [rel.from.clone(), rel.to.clone()];
            pair.sort();
            let [a, b] = pair;
            (a, b)
        } else {
            (rel.from.clone(), rel.to.clone())
        };

        if seen.insert(key) {
            links.push(GraphLink {
                source: rel.from.as_str().to_string(),
                target: rel.to.as_str().to_string(),
                kind: rel.kind.token().to_string(),
            });
        }
    }

    GraphData { nodes, links }
}
