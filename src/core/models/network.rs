//! Undirected interaction network
//!
//! Nodes are identified by their display label. Inserting a label that already
//! exists returns the existing node and leaves its metadata untouched, so the
//! first writer decides category and tooltip. Edges are never merged: adding
//! the same relation twice produces two parallel edges.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// What a node stands for; drives its color and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NodeCategory {
    /// A microalgae species
    Subject,
    /// A heavy metal
    Agent,
    /// An adsorption isotherm model
    Model,
    /// A test condition
    Measurement,
    /// A reported outcome
    Result,
}

impl NodeCategory {
    /// Every category, in display order
    pub const ALL: [Self; 5] = [
        Self::Subject,
        Self::Agent,
        Self::Model,
        Self::Measurement,
        Self::Result,
    ];

    /// Display color
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Subject => "blue",
            Self::Agent => "red",
            Self::Model => "green",
            Self::Measurement => "orange",
            Self::Result => "purple",
        }
    }

    /// Display size
    #[must_use]
    pub const fn size(self) -> u32 {
        match self {
            Self::Subject => 20,
            Self::Agent | Self::Model => 15,
            Self::Measurement | Self::Result => 12,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "Microalgae",
            Self::Agent => "Heavy metal",
            Self::Model => "Adsorption model",
            Self::Measurement => "Concentration",
            Self::Result => "Outcome",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Relation carried by an edge; only used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Relation {
    /// Subject removes a heavy metal
    Removes,
    /// Subject's adsorption follows a model
    Uses,
    /// Subject produced an outcome
    Outcome,
    /// Subject was tested at a concentration
    Concentration,
}

impl Relation {
    /// Every relation, in display order
    pub const ALL: [Self; 4] = [Self::Removes, Self::Uses, Self::Outcome, Self::Concentration];

    /// Display color
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Uses => "black",
            Self::Removes | Self::Outcome | Self::Concentration => "gray",
        }
    }

    /// Relation label shown as the edge tooltip
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Removes => "Removes",
            Self::Uses => "Uses",
            Self::Outcome => "Outcome",
            Self::Concentration => "Concentration",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Node weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAttrs {
    /// Display label, also the node identity
    pub label: String,
    /// Category set by the first insertion
    pub category: NodeCategory,
    /// Tooltip text
    pub title: String,
}

impl NodeAttrs {
    /// Display color
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.category.color()
    }

    /// Display size
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.category.size()
    }
}

/// A borrowed view of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Label of the subject end
    pub source: &'a str,
    /// Label of the other end
    pub target: &'a str,
    /// Relation shown on the edge
    pub relation: Relation,
}

impl Edge<'_> {
    /// Display color
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.relation.color()
    }
}

/// The finished interaction network
#[derive(Debug, Clone, Default)]
pub struct Network {
    graph: UnGraph<NodeAttrs, Relation>,
    index: HashMap<String, NodeIndex>,
}

impl Network {
    /// Create an empty network
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless its label already exists; returns its index either way
    pub fn upsert_node(
        &mut self,
        label: impl Into<String>,
        category: NodeCategory,
        title: impl Into<String>,
    ) -> NodeIndex {
        let label = label.into();
        if let Some(&idx) = self.index.get(&label) {
            return idx;
        }
        let idx = self.graph.add_node(NodeAttrs {
            label: label.clone(),
            category,
            title: title.into(),
        });
        self.index.insert(label, idx);
        idx
    }

    /// Add an undirected edge; parallel edges are kept
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, relation: Relation) {
        self.graph.add_edge(source, target, relation);
    }

    /// Look up a node by label
    #[must_use]
    pub fn node(&self, label: &str) -> Option<&NodeAttrs> {
        self.index.get(label).map(|&idx| &self.graph[idx])
    }

    /// Whether a node with this label exists
    #[must_use]
    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeAttrs> {
        self.graph.raw_nodes().iter().map(|n| &n.weight)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.graph.edge_references().map(move |e| Edge {
            source: &self.graph[e.source()].label,
            target: &self.graph[e.target()].label,
            relation: *e.weight(),
        })
    }

    /// Number of distinct nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, parallel edges included
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of edges touching a node (0 for unknown labels)
    #[must_use]
    pub fn degree(&self, label: &str) -> usize {
        self.index
            .get(label)
            .map_or(0, |&idx| self.graph.edges(idx).count())
    }

    /// Count edges `a - b` carrying `relation`, in either direction
    #[must_use]
    pub fn count_edges(&self, a: &str, b: &str, relation: Relation) -> usize {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return 0;
        };
        self.graph
            .edges_connecting(ia, ib)
            .filter(|e| *e.weight() == relation)
            .count()
    }

    /// Whether at least one edge `a - b` carries `relation`
    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str, relation: Relation) -> bool {
        self.count_edges(a, b, relation) > 0
    }

    /// Labels of the nodes adjacent to `label`, one entry per edge, in edge order
    #[must_use]
    pub fn neighbors(&self, label: &str) -> Vec<(&str, Relation)> {
        let Some(&idx) = self.index.get(label) else {
            return Vec::new();
        };
        let mut out: Vec<_> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (e.id(), self.graph[other].label.as_str(), *e.weight())
            })
            .collect();
        out.sort_by_key(|(id, _, _)| *id);
        out.into_iter().map(|(_, l, r)| (l, r)).collect()
    }

    /// Node counts per category
    #[must_use]
    pub fn count_by_category(&self) -> BTreeMap<NodeCategory, usize> {
        let mut counts = BTreeMap::new();
        for node in self.nodes() {
            *counts.entry(node.category).or_insert(0) += 1;
        }
        counts
    }

    /// Edge counts per relation
    #[must_use]
    pub fn count_by_relation(&self) -> BTreeMap<Relation, usize> {
        let mut counts = BTreeMap::new();
        for edge in self.graph.raw_edges() {
            *counts.entry(edge.weight).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Interaction network ({} nodes, {} edges):",
            self.node_count(),
            self.edge_count()
        )?;
        writeln!(f)?;

        for node in self.nodes().filter(|n| n.category == NodeCategory::Subject) {
            let links = self.neighbors(&node.label);
            if links.is_empty() {
                writeln!(f, "  {} → (no links)", node.label)?;
                continue;
            }
            writeln!(f, "  {}", node.label)?;
            for (other, relation) in links {
                writeln!(f, "    {relation:<13} → {other}")?;
            }
        }

        Ok(())
    }
}
