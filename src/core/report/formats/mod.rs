//! Report format implementations
//!
//! Provides exporters for different report formats: HTML, Markdown and JSON.

pub mod html;
pub mod json;
pub mod markdown;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

use crate::core::models::{Network, NodeCategory, Relation};
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Interactive vis-network page
    Html,
    /// Markdown summary with a Mermaid diagram
    Markdown,
    /// Raw node/edge dump
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// File name used when no output path is given
    #[must_use]
    pub const fn default_file_name(&self) -> &'static str {
        match self {
            Self::Html => "index.html",
            Self::Markdown => "network.md",
            Self::Json => "network.json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// One legend / summary table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CountRow {
    pub name: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// Per-category node counts, skipping empty categories
pub(crate) fn node_rows(network: &Network) -> Vec<CountRow> {
    let counts = network.count_by_category();
    NodeCategory::ALL
        .into_iter()
        .filter_map(|category| {
            counts.get(&category).map(|&count| CountRow {
                name: category.as_str(),
                color: category.color(),
                count,
            })
        })
        .collect()
}

/// Per-relation edge counts, skipping unused relations
pub(crate) fn edge_rows(network: &Network) -> Vec<CountRow> {
    let counts = network.count_by_relation();
    Relation::ALL
        .into_iter()
        .filter_map(|relation| {
            counts.get(&relation).map(|&count| CountRow {
                name: relation.as_str(),
                color: relation.color(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("HTML".parse::<ReportFormat>(), Ok(ReportFormat::Html));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(ReportFormat::Html.default_file_name(), "index.html");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
    }
}
