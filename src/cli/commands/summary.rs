//! Summary command handler

use super::load_dataset;
use algae_network::config::Config;
use algae_network::core::build_network;
use algae_network::core::models::{NodeCategory, Relation};
use std::path::Path;

/// Print node and edge counts per category and relation.
///
/// # Errors
/// Returns the message already printed to the user.
pub fn run(input: Option<&Path>, config: &Config, verbose: bool) -> Result<(), String> {
    let dataset = load_dataset(input).inspect_err(|err| eprintln!("{err}"))?;
    let network = build_network(dataset.records(), config.network.passes);

    println!("\n=== Summary ===");
    println!("Records: {}", dataset.len());
    println!("Passes: {}", config.network.passes.max(1));
    println!("Nodes: {}", network.node_count());

    let by_category = network.count_by_category();
    for category in NodeCategory::ALL {
        let count = by_category.get(&category).copied().unwrap_or(0);
        println!("  {category:<17} {count}");
    }

    println!("Edges: {}", network.edge_count());
    let by_relation = network.count_by_relation();
    for relation in Relation::ALL {
        let count = by_relation.get(&relation).copied().unwrap_or(0);
        println!("  {relation:<17} {count}");
    }

    if verbose {
        println!();
        print!("{network}");
    }

    Ok(())
}
