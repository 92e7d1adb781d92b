use declgraph::core::converter::DEFAULT_FALLBACK_DESCRIPTION;
use declgraph::core::{
    BuildOptions, DeclarationGraph, GraphBuilder, GraphConverter, GraphLink, GraphNode, IdScheme,
    LinkKind, NodeKind,
};
use declgraph::parsers::{InterfaceRecord, PropertyRecord};
use petgraph::visit::EdgeRef;

fn node_ids(graph: &DeclarationGraph) -> Vec<String> {
    graph
        .node_indices()
        .map(|idx| graph[idx].id.clone())
        .collect()
}

fn links(graph: &DeclarationGraph) -> Vec<(String, String)> {
    graph
        .edge_references()
        .map(|e| (e.weight().source.clone(), e.weight().target.clone()))
        .collect()
}

fn pair(source: &str, target: &str) -> (String, String) {
    (source.to_string(), target.to_string())
}

#[test]
fn graph_builder_links_by_index_and_records_ids() {
    let mut gb = GraphBuilder::new();
    let a = gb.add_node(GraphNode::interface("1".into(), "A_category:types".into(), String::new()));
    let b = gb.add_node(GraphNode::property("11".into(), "b_type:string".into(), String::new()));
    // same id as `b`, still a distinct node
    let c = gb.add_node(GraphNode::interface("11".into(), "C_category:types".into(), String::new()));

    assert!(gb.add_link(a, b, LinkKind::Owns).is_some());
    assert_eq!(gb.node_count(), 3);

    let graph = gb.build();
    assert_eq!(graph.edge_count(), 1);
    let edge = graph.edge_references().next().unwrap();
    assert_eq!(edge.target(), b);
    assert_ne!(edge.target(), c);
    assert_eq!(
        edge.weight(),
        &GraphLink::new(LinkKind::Owns, "1".into(), "11".into())
    );
}

#[test]
fn property_ids_concatenate_interface_id_and_index() {
    let records = vec![
        InterfaceRecord::new("A"),
        InterfaceRecord::new("B")
            .with_property(PropertyRecord::new("x", "string"))
            .with_property(PropertyRecord::new("y", "string"))
            .with_property(PropertyRecord::new("z", "string")),
    ];
    let (graph, stats) = GraphConverter::default().convert(&records);

    assert_eq!(node_ids(&graph), vec!["0", "1", "11", "12", "13"]);
    assert_eq!(links(&graph), vec![pair("1", "11"), pair("1", "12"), pair("1", "13")]);
    assert_eq!(stats.interfaces, 2);
    assert_eq!(stats.properties, 3);
    assert_eq!(stats.ownership_links, 3);
}

#[test]
fn composite_scheme_keeps_property_ids_distinct() {
    let mut records: Vec<_> = (0..12).map(|i| InterfaceRecord::new(format!("I{i}"))).collect();
    records[1] = InterfaceRecord::new("I1").with_property(PropertyRecord::new("p", "string"));

    let legacy = GraphConverter::default().convert(&records).0;
    let legacy_ids = node_ids(&legacy);
    assert_eq!(legacy_ids.iter().filter(|id| id.as_str() == "11").count(), 2);

    let composite = GraphConverter::new(BuildOptions {
        id_scheme: IdScheme::Composite,
        ..BuildOptions::default()
    })
    .convert(&records)
    .0;
    let composite_ids = node_ids(&composite);
    assert!(composite_ids.contains(&"1.1".to_string()));
    assert_eq!(composite_ids.iter().filter(|id| id.as_str() == "11").count(), 1);
}

#[test]
fn category_follows_parent_presence() {
    let records = vec![
        InterfaceRecord::new("Base").with_description("root"),
        InterfaceRecord::new("Derived")
            .with_description("child")
            .with_parent("Base"),
        InterfaceRecord::new("Orphan")
            .with_description("dangling")
            .with_parent("Nowhere"),
    ];
    let (graph, _) = GraphConverter::default().convert(&records);
    let labels: Vec<_> = graph.node_indices().map(|idx| graph[idx].label.clone()).collect();
    assert_eq!(
        labels,
        vec![
            "Base_category:types",
            "Derived_category:DataType",
            "Orphan_category:DataType"
        ]
    );
    assert!(graph
        .node_indices()
        .all(|idx| graph[idx].kind == NodeKind::Interface));
}

#[test]
fn parent_link_requires_earlier_declaration() {
    let records = vec![
        InterfaceRecord::new("Early").with_description("e"),
        InterfaceRecord::new("Child").with_parent("Early"),
        InterfaceRecord::new("Forward").with_parent("Late"),
        InterfaceRecord::new("Late").with_description("l"),
    ];
    let (graph, stats) = GraphConverter::default().convert(&records);

    assert_eq!(links(&graph), vec![pair("0", "1")]);
    assert_eq!(stats.extension_links, 1);
    assert_eq!(stats.unresolved_parents, 1);
    let kinds: Vec<_> = graph.edge_references().map(|e| e.weight().kind).collect();
    assert_eq!(kinds, vec![LinkKind::Extends]);
}

#[test]
fn fallback_description_applies_to_any_undocumented_interface() {
    let records = vec![
        InterfaceRecord::new("Element"),
        InterfaceRecord::new("Documented").with_description("has docs"),
        InterfaceRecord::new("Derived").with_parent("Element"),
    ];
    let (graph, _) = GraphConverter::default().convert(&records);
    let descriptions: Vec<_> = graph
        .node_indices()
        .map(|idx| graph[idx].description.clone())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            DEFAULT_FALLBACK_DESCRIPTION,
            "has docs",
            DEFAULT_FALLBACK_DESCRIPTION
        ]
    );
}

#[test]
fn fallback_description_is_configurable_and_skips_properties() {
    let records = vec![InterfaceRecord::new("A").with_property(PropertyRecord::new("a", "string"))];
    let (graph, _) = GraphConverter::new(BuildOptions {
        fallback_description: "n/a".to_string(),
        ..BuildOptions::default()
    })
    .convert(&records);
    let descriptions: Vec<_> = graph
        .node_indices()
        .map(|idx| graph[idx].description.clone())
        .collect();
    assert_eq!(descriptions, vec!["n/a", ""]);
}

#[test]
fn property_labels_encode_optionality_and_type() {
    let records = vec![InterfaceRecord::new("Patient")
        .with_property(PropertyRecord::new("name", "HumanName[]").optional())
        .with_property(PropertyRecord::new("active", "boolean"))
        .with_property(PropertyRecord::new("onChange", "(value: 'on' | 'off') => void"))];
    let (graph, _) = GraphConverter::default().convert(&records);
    let labels: Vec<_> = graph
        .node_indices()
        .filter(|&idx| graph[idx].kind == NodeKind::Property)
        .map(|idx| graph[idx].label.clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            "name?_type:HumanName[]",
            "active_type:boolean",
            "onChange_type:[(value: on | off) => void]"
        ]
    );
}

#[test]
fn links_follow_per_interface_processing_order() {
    let records = vec![
        InterfaceRecord::new("A").with_property(PropertyRecord::new("a", "string")),
        InterfaceRecord::new("B")
            .with_parent("A")
            .with_property(PropertyRecord::new("b1", "string"))
            .with_property(PropertyRecord::new("b2", "string")),
    ];
    let (graph, _) = GraphConverter::default().convert(&records);
    assert_eq!(node_ids(&graph), vec!["0", "01", "1", "11", "12"]);
    assert_eq!(
        links(&graph),
        vec![
            pair("0", "01"),
            pair("1", "11"),
            pair("1", "12"),
            pair("0", "1")
        ]
    );
}
