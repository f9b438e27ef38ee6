//! Report generation for interaction networks
//!
//! Renders a built [`Network`] as an interactive HTML page, a Markdown summary
//! with a Mermaid diagram, or a raw JSON dump of the vis-network payload.

pub mod formats;
pub mod visualization;

use crate::core::error::Result;
use crate::core::models::Network;
use std::fs;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};
pub use visualization::{MermaidGenerator, PageSettings, VisGraph, VisOptions};

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// The finished network
    pub network: &'a Network,
    /// Title and canvas settings
    pub page: &'a PageSettings,
    /// vis-network options document
    pub options: &'a VisOptions,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(network: &'a Network, page: &'a PageSettings, options: &'a VisOptions) -> Self {
        Self {
            network,
            page,
            options,
        }
    }

    /// Page title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.page.title
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;

    /// Render and write the report, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Pick the generator for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
