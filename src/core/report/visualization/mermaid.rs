//! Mermaid diagram generator for interaction networks
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::models::{Network, NodeCategory};
use std::collections::HashMap;
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a Mermaid flowchart from a network
    ///
    /// Nodes are styled by category and edges are labeled with their relation.
    /// Parallel edges are drawn once per edge.
    #[must_use]
    pub fn generate_network(network: &Network) -> String {
        let mut output = String::from("```mermaid\nflowchart LR\n");
        let mut ids: HashMap<&str, String> = HashMap::new();

        for category in NodeCategory::ALL {
            let _ = writeln!(
                output,
                "    classDef {} fill:{},color:#fff",
                Self::class_name(category),
                category.color()
            );
        }
        output.push('\n');

        for (position, node) in network.nodes().enumerate() {
            let safe_id = format!("{}_{position}", Self::sanitize_id(&node.label));
            let _ = writeln!(
                output,
                "    {safe_id}[\"{}\"]:::{}",
                Self::escape_label(&node.label),
                Self::class_name(node.category)
            );
            ids.insert(node.label.as_str(), safe_id);
        }

        output.push('\n');

        for edge in network.edges() {
            let (Some(source), Some(target)) = (ids.get(edge.source), ids.get(edge.target)) else {
                continue;
            };
            let _ = writeln!(output, "    {source} ---|{}| {target}", edge.relation);
        }

        output.push_str("```\n");
        output
    }

    /// CSS class used for a category
    const fn class_name(category: NodeCategory) -> &'static str {
        match category {
            NodeCategory::Subject => "subject",
            NodeCategory::Agent => "agent",
            NodeCategory::Model => "model",
            NodeCategory::Measurement => "measurement",
            NodeCategory::Result => "result",
        }
    }

    /// Quote-safe label text
    fn escape_label(label: &str) -> String {
        label.replace('"', "#quot;")
    }

    /// Sanitize a node label for use as a Mermaid node ID
    fn sanitize_id(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Relation;

    #[test]
    fn test_mermaid_generation() {
        let mut net = Network::new();
        let s = net.upsert_node("Spirogyra sp.", NodeCategory::Subject, "");
        let m = net.upsert_node("lead", NodeCategory::Agent, "");
        let r = net.upsert_node("time_frame: 1.867 hours", NodeCategory::Result, "");
        net.add_edge(s, m, Relation::Removes);
        net.add_edge(s, r, Relation::Outcome);

        let diagram = MermaidGenerator::generate_network(&net);

        assert!(diagram.contains("```mermaid"));
        assert!(diagram.contains("flowchart LR"));
        assert!(diagram.contains("Spirogyra_sp__0[\"Spirogyra sp.\"]:::subject"));
        assert!(diagram.contains("Spirogyra_sp__0 ---|Removes| lead_1"));
        assert!(diagram.contains("---|Outcome| time_frame__1_867_hours_2"));
        assert!(diagram.contains("classDef agent fill:red"));
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(MermaidGenerator::sanitize_id("range: 5 - 52 mg/L"), "range__5___52_mg_L");
        assert_eq!(MermaidGenerator::sanitize_id("temperature: 35 °C"), "temperature__35__C");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(MermaidGenerator::escape_label("a \"b\""), "a #quot;b#quot;");
    }
}
