//! Integration tests for building networks from records

use algae_network::core::models::{FieldValue, NodeCategory, Record, Relation};
use algae_network::core::{build_network, Dataset, NetworkBuilder};

fn ulothrix() -> Record {
    Record::new("Ulothrix zonata")
        .with_agent("copper")
        .with_measurement("range", "5 - 52 mg/L")
        .with_result("adsorption_model", "langmuir")
        .with_result("removal_time", "1200s")
        .with_result("optimum_pH", "4.5s")
}

#[test]
fn test_single_record_exact_shape() {
    let net = build_network(&[ulothrix()], 1);

    assert_eq!(net.node_count(), 6);
    assert_eq!(net.edge_count(), 5);

    let expected = [
        ("Ulothrix zonata", NodeCategory::Subject, "Microalgae: Ulothrix zonata"),
        ("copper", NodeCategory::Agent, "Heavy Metal: copper"),
        ("langmuir", NodeCategory::Model, "Adsorption Model"),
        ("removal_time: 1200s", NodeCategory::Result, "Removal Time: 1200s"),
        ("optimum_pH: 4.5s", NodeCategory::Result, "Optimum Ph: 4.5s"),
        (
            "range: 5 - 52 mg/L",
            NodeCategory::Measurement,
            "Concentration Range: 5 - 52 mg/L",
        ),
    ];
    for (label, category, title) in expected {
        let node = net.node(label).unwrap_or_else(|| panic!("missing node {label}"));
        assert_eq!(node.category, category, "category of {label}");
        assert_eq!(node.title, title, "title of {label}");
    }

    let s = "Ulothrix zonata";
    assert_eq!(net.count_edges(s, "copper", Relation::Removes), 1);
    assert_eq!(net.count_edges(s, "langmuir", Relation::Uses), 1);
    assert_eq!(net.count_edges(s, "removal_time: 1200s", Relation::Outcome), 1);
    assert_eq!(net.count_edges(s, "optimum_pH: 4.5s", Relation::Outcome), 1);
    assert_eq!(
        net.count_edges(s, "range: 5 - 52 mg/L", Relation::Concentration),
        1
    );
}

#[test]
fn test_insertion_order_and_colors() {
    let net = build_network(&[ulothrix()], 1);
    let labels: Vec<_> = net.nodes().map(|n| n.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Ulothrix zonata",
            "copper",
            "langmuir",
            "removal_time: 1200s",
            "optimum_pH: 4.5s",
            "range: 5 - 52 mg/L",
        ]
    );

    let colors: Vec<_> = net.nodes().map(|n| (n.color(), n.size())).collect();
    assert_eq!(
        colors,
        vec![
            ("blue", 20),
            ("red", 15),
            ("green", 15),
            ("purple", 12),
            ("purple", 12),
            ("orange", 12),
        ]
    );

    let edge_colors: Vec<_> = net.edges().map(|e| e.color()).collect();
    assert_eq!(edge_colors, vec!["gray", "black", "gray", "gray", "gray"]);
}

#[test]
fn test_every_subject_appears_once_with_removes_edges() {
    let dataset = Dataset::builtin().unwrap();
    let net = build_network(dataset.records(), 1);

    for record in &dataset {
        let subject = net.node(&record.subject).unwrap();
        assert_eq!(subject.category, NodeCategory::Subject);
        for agent in &record.agents {
            assert_eq!(net.node(agent).unwrap().category, NodeCategory::Agent);
            assert!(net.has_edge(&record.subject, agent, Relation::Removes));
        }
    }
    assert_eq!(
        net.nodes()
            .filter(|n| n.category == NodeCategory::Subject)
            .count(),
        dataset.len()
    );
}

#[test]
fn test_model_gets_exactly_one_uses_edge() {
    let dataset = Dataset::builtin().unwrap();
    let net = build_network(dataset.records(), 1);

    for record in &dataset {
        match record.adsorption_model() {
            Some(model) => {
                assert_eq!(net.count_edges(&record.subject, model, Relation::Uses), 1);
                let outcome = format!("adsorption_model: {model}");
                assert!(!net.contains_node(&outcome));
            }
            None => assert!(net
                .neighbors(&record.subject)
                .iter()
                .all(|(_, relation)| *relation != Relation::Uses)),
        }
    }
}

#[test]
fn test_builtin_dataset_totals() {
    let net = build_network(Dataset::builtin().unwrap().records(), 1);

    let categories = net.count_by_category();
    assert_eq!(categories[&NodeCategory::Subject], 7);
    assert_eq!(categories[&NodeCategory::Agent], 4);
    assert_eq!(categories[&NodeCategory::Model], 1);
    assert_eq!(categories[&NodeCategory::Result], 20);
    assert_eq!(categories[&NodeCategory::Measurement], 8);

    let relations = net.count_by_relation();
    assert_eq!(relations[&Relation::Removes], 10);
    assert_eq!(relations[&Relation::Uses], 2);
    assert_eq!(relations[&Relation::Outcome], 20);
    assert_eq!(relations[&Relation::Concentration], 8);
}

#[test]
fn test_shared_labels_share_nodes() {
    let net = build_network(Dataset::builtin().unwrap().records(), 1);

    assert_eq!(net.degree("cadmium"), 5);
    assert_eq!(net.degree("mercury"), 2);
    assert_eq!(net.degree("langmuir"), 2);
    assert!(net.has_edge("Spirulina platensis", "langmuir", Relation::Uses));
    assert!(net.has_edge("Ulothrix zonata", "langmuir", Relation::Uses));
}

#[test]
fn test_nested_outcomes_expand_per_leaf() {
    let net = build_network(Dataset::builtin().unwrap().records(), 1);

    let s = "Chlamydomonas reinhardtii";
    for leaf in [
        "mercury: 0.072 mg/kg",
        "cadmium: 0.043 mg/kg",
        "lead: 0.098 mg/kg",
    ] {
        assert!(net.has_edge(s, leaf, Relation::Outcome), "missing {leaf}");
    }
    assert!(!net
        .nodes()
        .any(|n| n.label.starts_with("biosorption_capacity")));
    assert_eq!(
        net.node("mercury: 0.072 mg/kg").unwrap().title,
        "Mercury: 0.072 mg/kg"
    );
}

#[test]
fn test_second_pass_doubles_edges_not_nodes() {
    let records = Dataset::builtin().unwrap().records().to_vec();
    let once = build_network(&records, 1);
    let twice = build_network(&records, 2);

    assert_eq!(twice.node_count(), once.node_count());
    assert_eq!(twice.edge_count(), 2 * once.edge_count());
    assert_eq!(
        twice.count_edges("Ulothrix zonata", "copper", Relation::Removes),
        2
    );
}

#[test]
fn test_empty_record() {
    let net = build_network(&[Record::new("Chlorella vulgaris")], 1);
    assert_eq!(net.node_count(), 1);
    assert_eq!(net.edge_count(), 0);
    assert!(net.neighbors("Chlorella vulgaris").is_empty());
}

#[test]
fn test_first_writer_wins_on_label_collision() {
    // the same "range: 5 mg/L" label is an outcome first, a condition later
    let first = Record::new("A").with_result("range", "5 mg/L");
    let second = Record::new("B").with_measurement("range", "5 mg/L");
    let mut builder = NetworkBuilder::new();
    builder.add_record(&first).add_record(&second);
    let net = builder.finish();

    let node = net.node("range: 5 mg/L").unwrap();
    assert_eq!(node.category, NodeCategory::Result);
    assert_eq!(node.title, "Range: 5 mg/L");
    assert_eq!(net.node_count(), 3);
    assert!(net.has_edge("B", "range: 5 mg/L", Relation::Concentration));
}

#[test]
fn test_nested_value_keeps_leaf_keys() {
    let record = Record::new("C").with_result(
        "uptake",
        FieldValue::nested([("lead", "2 mg/g")]),
    );
    let net = build_network(&[record], 1);
    assert!(net.has_edge("C", "lead: 2 mg/g", Relation::Outcome));
    assert!(!net.contains_node("uptake: lead"));
}

#[test]
fn test_display_lists_subject_links() {
    let net = build_network(&[ulothrix()], 1);
    let text = net.to_string();
    assert!(text.starts_with("Interaction network (6 nodes, 5 edges):"));
    assert!(text.contains("Ulothrix zonata"));
    assert!(text.contains("→ copper"));
}
