//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use atlas_domain::{EntityId, Relationship};
use atlas_graph::GraphData;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a relationship list from the perspective of one entry.
    ///
    /// Table output shows direction-aware labels: an asymmetric edge where
    /// the subject is the target reads with the inverse label ("Solved by"
    /// rather than "Solves").
    pub fn format_relationships(
        &self,
        subject: &EntityId,
        relationships: &[Relationship],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_relationships_json(relationships),
            OutputFormat::Table => Ok(self.format_relationships_table(subject, relationships)),
            OutputFormat::Quiet => Ok(self.format_relationships_quiet(subject, relationships)),
        }
    }

    /// Format relationships as JSON.
    fn format_relationships_json(&self, relationships: &[Relationship]) -> Result<String> {
        let json_rels: Vec<serde_json::Value> = relationships
            .iter()
            .map(|rel| {
                serde_json::json!({
                    "from": rel.from.as_str(),
                    "to": rel.to.as_str(),
                    "type": rel.kind.token(),
                    "bidirectional": rel.bidirectional,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_rels)?)
    }

    /// Format relationships as a table.
    fn format_relationships_table(
        &self,
        subject: &EntityId,
        relationships: &[Relationship],
    ) -> String {
        if relationships.is_empty() {
            return self.colorize("No relationships found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Relationship", "Entry", "Category", "Link"]);

        for rel in relationships {
            let outgoing = &rel.from == subject;
            let other = if outgoing { &rel.to } else { &rel.from };
            let link = if rel.bidirectional {
                "<-->"
            } else if outgoing {
                "-->"
            } else {
                "<--"
            };

            builder.push_record([
                rel.kind.label_for_direction(outgoing),
                other.as_str(),
                other.category().as_str(),
                link,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format relationships in quiet mode (related entry ids only).
    fn format_relationships_quiet(
        &self,
        subject: &EntityId,
        relationships: &[Relationship],
    ) -> String {
        relationships
            .iter()
            .map(|rel| {
                let other = if &rel.from == subject {
                    &rel.to
                } else {
                    &rel.from
                };
                other.as_str().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the visualization view.
    pub fn format_graph(&self, data: &GraphData) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
            OutputFormat::Table => Ok(self.format_graph_table(data)),
            OutputFormat::Quiet => Ok(data
                .nodes
                .iter()
                .map(|n| n.id.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the visualization view as node and link tables.
    fn format_graph_table(&self, data: &GraphData) -> String {
        if data.nodes.is_empty() {
            return self.colorize("Graph is empty.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Entry", "Title", "Category", "Connections"]);
        for node in &data.nodes {
            let connections = node.connections.to_string();
            builder.push_record([
                node.id.as_str(),
                node.name.as_str(),
                node.category.as_str(),
                connections.as_str(),
            ]);
        }
        let mut nodes_table = builder.build();
        nodes_table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut builder = Builder::default();
        builder.push_record(["Source", "Type", "Target"]);
        for link in &data.links {
            builder.push_record([link.source.as_str(), link.kind.as_str(), link.target.as_str()]);
        }
        let mut links_table = builder.build();
        links_table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n\n{}", nodes_table, links_table)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::RelationshipType;

    fn id(s: &str) -> EntityId {
        EntityId::new(s).unwrap()
    }

    fn sample() -> (EntityId, Vec<Relationship>) {
        let subject = id("patterns/active-partner");
        let rels = vec![
            Relationship::new(
                subject.clone(),
                id("obstacles/black-box-ai"),
                RelationshipType::Solves,
                false,
            ),
            Relationship::new(
                id("patterns/show-me"),
                subject.clone(),
                RelationshipType::Uses,
                false,
            ),
        ];
        (subject, rels)
    }

    #[test]
    fn test_quiet_lists_related_entry_ids() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let (subject, rels) = sample();

        let out = formatter.format_relationships(&subject, &rels).unwrap();
        assert_eq!(out, "obstacles/black-box-ai\npatterns/show-me");
    }

    #[test]
    fn test_json_carries_all_fields() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let (subject, rels) = sample();

        let out = formatter.format_relationships(&subject, &rels).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["type"], "solves");
        assert_eq!(parsed[0]["bidirectional"], false);
        assert_eq!(parsed[1]["from"], "patterns/show-me");
    }

    #[test]
    fn test_table_uses_inverse_label_for_incoming_edges() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let (subject, rels) = sample();

        let out = formatter.format_relationships(&subject, &rels).unwrap();
        assert!(out.contains("Solves"));
        assert!(out.contains("Used by"));
    }

    #[test]
    fn test_empty_table_message() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let subject = id("patterns/alone");

        let out = formatter.format_relationships(&subject, &[]).unwrap();
        assert_eq!(out, "No relationships found.");
    }

    #[test]
    fn test_status_messages_without_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("ok"), "✓ ok");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}
