//! HTML report generator
//!
//! Renders the interactive vis-network page. Graph data and the options
//! document are embedded as JSON; vis-network itself is loaded from the
//! configured URL.

use crate::core::error::Result;
use crate::core::report::formats::{node_rows, CountRow};
use crate::core::report::visualization::{script_json, VisGraph};
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;

#[derive(Template)]
#[template(path = "network.html")]
struct NetworkPage<'a> {
    title: &'a str,
    width: &'a str,
    height: &'a str,
    vis_js_url: &'a str,
    legend: Vec<CountRow>,
    nodes_json: String,
    edges_json: String,
    options_json: String,
}

/// HTML report generator with an interactive network
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let graph = VisGraph::from_network(ctx.network);
        let page = NetworkPage {
            title: ctx.title(),
            width: &ctx.page.width,
            height: &ctx.page.height,
            vis_js_url: &ctx.page.vis_js_url,
            legend: node_rows(ctx.network),
            nodes_json: script_json(&graph.nodes)?,
            edges_json: script_json(&graph.edges)?,
            options_json: script_json(ctx.options)?,
        };
        Ok(page.render()?)
    }
}
