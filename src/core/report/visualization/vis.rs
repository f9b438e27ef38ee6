//! vis-network payloads
//!
//! Node/edge records and the options document handed to `vis.Network`.

use crate::core::models::Network;
use serde::Serialize;

/// Page-level settings for rendered documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    /// Page and header title
    pub title: String,
    /// CSS height of the canvas
    pub height: String,
    /// CSS width of the canvas
    pub width: String,
    /// vis-network bundle location
    pub vis_js_url: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Microalgae Heavy Metal Interaction Network".to_string(),
            height: "700px".to_string(),
            width: "100%".to_string(),
            vis_js_url: "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"
                .to_string(),
        }
    }
}

/// One vis-network node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisNode<'a> {
    /// Node id, same as the label
    pub id: &'a str,
    /// Display label
    pub label: &'a str,
    /// Fill color
    pub color: &'static str,
    /// Dot size
    pub size: u32,
    /// Tooltip
    pub title: &'a str,
    /// Category, used by the legend
    pub group: &'static str,
}

/// One vis-network edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisEdge<'a> {
    /// Source node id
    pub from: &'a str,
    /// Target node id
    pub to: &'a str,
    /// Line color
    pub color: &'static str,
    /// Tooltip
    pub title: &'static str,
}

/// Nodes and edges in insertion order
#[derive(Debug, Clone, Serialize)]
pub struct VisGraph<'a> {
    /// All nodes
    pub nodes: Vec<VisNode<'a>>,
    /// All edges, parallel edges included
    pub edges: Vec<VisEdge<'a>>,
}

impl<'a> VisGraph<'a> {
    /// Flatten a network into vis-network records
    #[must_use]
    pub fn from_network(network: &'a Network) -> Self {
        let nodes = network
            .nodes()
            .map(|node| VisNode {
                id: &node.label,
                label: &node.label,
                color: node.color(),
                size: node.size(),
                title: &node.title,
                group: node.category.as_str(),
            })
            .collect();
        let edges = network
            .edges()
            .map(|edge| VisEdge {
                from: edge.source,
                to: edge.target,
                color: edge.color(),
                title: edge.relation.as_str(),
            })
            .collect();
        Self { nodes, edges }
    }
}

/// Node scaling bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scaling {
    /// Smallest rendered size
    pub min: u32,
    /// Largest rendered size
    pub max: u32,
}

/// Label font
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    /// Font size in px
    pub size: u32,
    /// Font color
    pub color: String,
}

/// `nodes` section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeOptions {
    /// Node shape
    pub shape: String,
    /// Size scaling
    pub scaling: Scaling,
    /// Label font
    pub font: Font,
}

/// Edge color inheritance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeColor {
    /// Inherit the color from the connected nodes
    pub inherit: bool,
}

/// `edges` section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeOptions {
    /// Color handling
    pub color: EdgeColor,
    /// Line width
    pub width: f64,
}

/// Barnes-Hut solver parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarnesHut {
    /// Repulsion strength (negative)
    pub gravitational_constant: f64,
    /// Rest length of edges
    pub spring_length: f64,
    /// Edge stiffness
    pub spring_constant: f64,
}

/// `physics` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsOptions {
    /// Solver parameters
    pub barnes_hut: BarnesHut,
    /// Velocity below which the layout is considered stable
    pub min_velocity: f64,
}

/// The full options document passed to `vis.Network`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisOptions {
    /// Node defaults
    pub nodes: NodeOptions,
    /// Edge defaults
    pub edges: EdgeOptions,
    /// Layout physics
    pub physics: PhysicsOptions,
}

impl Default for VisOptions {
    fn default() -> Self {
        Self {
            nodes: NodeOptions {
                shape: "dot".to_string(),
                scaling: Scaling { min: 10, max: 30 },
                font: Font {
                    size: 14,
                    color: "#34495e".to_string(),
                },
            },
            edges: EdgeOptions {
                color: EdgeColor { inherit: true },
                width: 1.5,
            },
            physics: PhysicsOptions {
                barnes_hut: BarnesHut {
                    gravitational_constant: -3000.0,
                    spring_length: 150.0,
                    spring_constant: 0.05,
                },
                min_velocity: 0.75,
            },
        }
    }
}

/// Serialize for embedding in a `<script>` block
///
/// `</` is written as `<\/` so data can never close the script element.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{NodeCategory, Relation};

    #[test]
    fn test_options_document_shape() {
        let json = serde_json::to_value(VisOptions::default()).unwrap();
        assert_eq!(json["nodes"]["shape"], "dot");
        assert_eq!(json["nodes"]["scaling"]["max"], 30);
        assert_eq!(json["edges"]["color"]["inherit"], true);
        assert_eq!(json["physics"]["barnesHut"]["gravitationalConstant"], -3000.0);
        assert_eq!(json["physics"]["barnesHut"]["springConstant"], 0.05);
        assert_eq!(json["physics"]["minVelocity"], 0.75);
    }

    #[test]
    fn test_vis_graph_from_network() {
        let mut net = Network::new();
        let s = net.upsert_node("Spirulina platensis", NodeCategory::Subject, "Microalgae: Spirulina platensis");
        let m = net.upsert_node("langmuir", NodeCategory::Model, "Adsorption Model");
        net.add_edge(s, m, Relation::Uses);

        let graph = VisGraph::from_network(&net);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].color, "blue");
        assert_eq!(graph.nodes[0].size, 20);
        assert_eq!(graph.nodes[1].color, "green");
        assert_eq!(graph.edges[0].title, "Uses");
        assert_eq!(graph.edges[0].color, "black");
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let json = script_json(&["</script><b>"]).unwrap();
        assert!(!json.contains("</"));
        assert!(json.contains("<\\/script>"));
    }
}
