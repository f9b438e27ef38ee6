//! Graph builder: turns records into an interaction network
//!
//! Per record:
//! 1. a Subject node for the organism
//! 2. an Agent node and a `Removes` edge per studied metal
//! 3. a Model node and a `Uses` edge when `adsorption_model` is a single value
//! 4. a Result node and an `Outcome` edge per remaining outcome leaf
//! 5. a Measurement node and a `Concentration` edge per condition leaf
//!
//! Node labels are used verbatim as identities, so records that share an
//! outcome label share the node.

use crate::core::models::{Network, NodeCategory, Record, Relation, ADSORPTION_MODEL_KEY};
use log::debug;

/// Incremental network builder
///
/// Records can be fed in several batches. Feeding the same record twice adds
/// its edges twice but never duplicates a node.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    network: Network,
    records_added: usize,
}

impl NetworkBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record's nodes and edges
    pub fn add_record(&mut self, record: &Record) -> &mut Self {
        let net = &mut self.network;
        let subject = net.upsert_node(
            record.subject.as_str(),
            NodeCategory::Subject,
            format!("Microalgae: {}", record.subject),
        );

        for agent in &record.agents {
            let idx = net.upsert_node(
                agent.as_str(),
                NodeCategory::Agent,
                format!("Heavy Metal: {agent}"),
            );
            net.add_edge(subject, idx, Relation::Removes);
        }

        let model = record.adsorption_model();
        if let Some(model) = model {
            let idx = net.upsert_node(model, NodeCategory::Model, "Adsorption Model");
            net.add_edge(subject, idx, Relation::Uses);
        }

        for (key, value) in record.results.iter() {
            if model.is_some() && key == ADSORPTION_MODEL_KEY {
                continue;
            }
            for (leaf_key, leaf_value) in value.leaves(key) {
                let idx = net.upsert_node(
                    format!("{leaf_key}: {leaf_value}"),
                    NodeCategory::Result,
                    format!("{}: {leaf_value}", title_case(leaf_key)),
                );
                net.add_edge(subject, idx, Relation::Outcome);
            }
        }

        for (key, value) in record.measurements.iter() {
            for (leaf_key, leaf_value) in value.leaves(key) {
                let idx = net.upsert_node(
                    format!("{leaf_key}: {leaf_value}"),
                    NodeCategory::Measurement,
                    format!("Concentration {}: {leaf_value}", title_case(leaf_key)),
                );
                net.add_edge(subject, idx, Relation::Concentration);
            }
        }

        self.records_added += 1;
        debug!(
            "Added record '{}' ({} nodes, {} edges so far)",
            record.subject,
            net.node_count(),
            net.edge_count()
        );
        self
    }

    /// Add every record in order
    pub fn extend<'a, I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.add_record(record);
        }
        self
    }

    /// The network built so far
    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Number of records added, counting repeats
    #[must_use]
    pub const fn records_added(&self) -> usize {
        self.records_added
    }

    /// Finish building
    #[must_use]
    pub fn finish(self) -> Network {
        self.network
    }
}

/// Build a network by traversing `records` `passes` times
///
/// One pass is the normal case. Extra passes repeat every edge and are only
/// useful to emphasize links visually.
#[must_use]
pub fn build_network(records: &[Record], passes: usize) -> Network {
    let mut builder = NetworkBuilder::new();
    for _ in 0..passes.max(1) {
        builder.extend(records);
    }
    builder.finish()
}

/// `snake_case` key to a title: underscores become spaces, every word is
/// capitalized and the rest lowered (`optimum_pH` → `Optimum Ph`).
#[must_use]
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
