#![cfg(feature = "dot")]

use vertex_walk::{DiGraph, dot::DotError};

fn edge_list(graph: &DiGraph<String>) -> Vec<(String, String)> {
    graph
        .edges()
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

#[test]
fn test_roundtrip_preserves_vertices_and_edges() {
    let graph: DiGraph<String> = [("A", "B"), ("B", "C"), ("C", "A"), ("A", "D")]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
    let dot = graph.to_dot_string().unwrap();
    let parsed = DiGraph::from_dot(&dot).unwrap();

    assert_eq!(
        parsed.vertices().collect::<Vec<_>>(),
        graph.vertices().collect::<Vec<_>>()
    );
    assert_eq!(edge_list(&parsed), edge_list(&graph));
    assert_eq!(
        parsed.traverse(&"A".to_string()).unwrap(),
        ["A", "B", "C", "D"]
    );
}

#[test]
fn test_roundtrip_labels_with_spaces() {
    let graph = DiGraph::from_edges([("New York".to_string(), "Boston".to_string())]);
    let parsed = DiGraph::from_dot(&graph.to_dot_string().unwrap()).unwrap();
    assert_eq!(edge_list(&parsed), edge_list(&graph));
}

#[test]
fn test_roundtrip_non_ascii_labels() {
    let graph = DiGraph::from_edges([
        ("café".to_string(), "c".to_string()),
        ("c".to_string(), "東京".to_string()),
    ]);
    let parsed = DiGraph::from_dot(&graph.to_dot_string().unwrap()).unwrap();
    assert_eq!(
        parsed.vertices().map(String::as_str).collect::<Vec<_>>(),
        ["café", "c", "東京"]
    );
    assert_eq!(edge_list(&parsed), edge_list(&graph));
}

#[test]
fn test_roundtrip_escaped_characters() {
    let names = ["a\\b", "say \"hi\"", "it's", "tab\there", "back\\slash end"];
    let mut graph = DiGraph::new();
    for name in names {
        graph.add_vertex(name.to_string());
    }
    graph
        .add_edge(&names[0].to_string(), &names[1].to_string())
        .unwrap();
    let parsed = DiGraph::from_dot(&graph.to_dot_string().unwrap()).unwrap();
    assert_eq!(
        parsed.vertices().map(String::as_str).collect::<Vec<_>>(),
        names
    );
    assert_eq!(edge_list(&parsed), edge_list(&graph));
}

#[test]
fn test_roundtrip_isolated_vertex() {
    let mut graph = DiGraph::new();
    graph.add_vertex("lonely".to_string());
    let parsed = DiGraph::from_dot(&graph.to_dot_string().unwrap()).unwrap();
    assert_eq!(parsed.num_vertices(), 1);
    assert_eq!(parsed.num_edges(), 0);
}

#[test]
fn test_render_numeric_vertices() {
    let graph = DiGraph::from_edges([(1u32, 2u32), (2, 3)]);
    let mut output = Vec::new();
    graph.write_dot_named("numbers", &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("digraph numbers {"));
    assert!(text.contains("n1 -> n2"));

    let parsed = DiGraph::from_dot(&text).unwrap();
    assert_eq!(
        parsed.vertices().map(String::as_str).collect::<Vec<_>>(),
        ["1", "2", "3"]
    );
}

#[test]
fn test_parse_error_message() {
    let err = DiGraph::from_dot("not dot at all {").unwrap_err();
    assert!(matches!(err, DotError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse DOT data"));
}
