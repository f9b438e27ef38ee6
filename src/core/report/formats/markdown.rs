//! Markdown report generator
//!
//! Summarizes node and edge counts and embeds a Mermaid flowchart of the
//! network. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::error::Result;
use crate::core::models::NodeCategory;
use crate::core::report::formats::{edge_rows, node_rows, CountRow};
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "network.md", escape = "none")]
struct NetworkSummary<'a> {
    title: &'a str,
    node_count: usize,
    edge_count: usize,
    subject_count: usize,
    node_rows: Vec<CountRow>,
    edge_rows: Vec<CountRow>,
    mermaid: String,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let network = ctx.network;
        let summary = NetworkSummary {
            title: ctx.title(),
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            subject_count: network
                .count_by_category()
                .get(&NodeCategory::Subject)
                .copied()
                .unwrap_or(0),
            node_rows: node_rows(network),
            edge_rows: edge_rows(network),
            mermaid: MermaidGenerator::generate_network(network),
        };
        Ok(summary.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_network;
    use crate::core::models::Record;
    use crate::core::report::{PageSettings, VisOptions};

    #[test]
    fn test_markdown_summary() {
        let record = Record::new("Ulothrix zonata")
            .with_agent("copper")
            .with_result("adsorption_model", "langmuir");
        let network = build_network(&[record], 1);
        let page = PageSettings::default();
        let options = VisOptions::default();

        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&network, &page, &options))
            .unwrap();

        assert!(md.starts_with("# Microalgae Heavy Metal Interaction Network"));
        assert!(md.contains("3 nodes and 2 edges built from 1 organisms."));
        assert!(md.contains("| Heavy metal | red | 1 |"));
        assert!(md.contains("| Uses | black | 1 |"));
        assert!(md.contains("```mermaid"));
    }
}
