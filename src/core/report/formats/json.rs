//! JSON export of the vis-network payload

use crate::core::error::Result;
use crate::core::report::visualization::VisGraph;
use crate::core::report::{ReportContext, ReportGenerator};

/// Writes `{ "nodes": [...], "edges": [...] }`
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let graph = VisGraph::from_network(ctx.network);
        Ok(serde_json::to_string_pretty(&graph)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_network;
    use crate::core::models::Record;
    use crate::core::report::{PageSettings, VisOptions};

    #[test]
    fn test_json_dump() {
        let record = Record::new("Spirogyra sp.").with_agent("lead");
        let network = build_network(&[record], 2);
        let page = PageSettings::default();
        let options = VisOptions::default();

        let json = JsonReporter::new()
            .render(&ReportContext::new(&network, &page, &options))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["edges"].as_array().unwrap().len(), 2);
        assert_eq!(value["edges"][0]["title"], "Removes");
        assert_eq!(value["nodes"][1]["color"], "red");
    }
}
