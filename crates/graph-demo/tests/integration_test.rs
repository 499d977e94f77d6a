use std::{fs, path::PathBuf};

use adj_graph::{Color, Graph, GraphKind};
use approx::assert_relative_eq;
use graph_demo::{
    console::PROMPT,
    demo::{DEMO_EDGES, DEMO_VALUES, demo_graph, load_graph},
};

mod common;

#[test]
fn demo_graph_matches_definition() {
    let graph = common::setup();

    assert_eq!(graph.len(), DEMO_VALUES.len());
    assert_eq!(graph.size(), DEMO_VALUES.len());
    assert_relative_eq!(graph.weight(&400, &500), 5.5);

    for (from, to, weight) in DEMO_EDGES {
        assert_eq!(graph.edge_weight(&from, &to), Some(weight));
        assert_eq!(graph.edge_weight(&to, &from), Some(weight));
    }

    let first = graph.vertex_at(0);
    assert_eq!(*first.value(), 100);
    assert_eq!(
        first.neighbors().map(|t| t.index()).collect::<Vec<usize>>(),
        vec![1, 3]
    );
    assert!(graph.vertices().all(|v| v.color() == Color::Undiscovered));
}

#[test]
fn directed_demo_graph() {
    let graph = demo_graph(GraphKind::Directed).unwrap();

    assert_relative_eq!(graph.weight(&400, &500), 5.5);
    assert_eq!(graph.edge_weight(&500, &400), None);
    assert_eq!(graph.edge_count(), DEMO_EDGES.len());
}

#[test]
fn console_session() {
    let graph = common::setup();
    let output = common::console_output(&graph, "0\n7\nabc\n-1\n4\n");

    let expected = format!(
        "\n{PROMPT}[0]100 color=Undiscovered distance=- predecessor=-\n\
         neighbors: 200 (0.50) 400 (1.50)\n\
         \n{PROMPT}index 7 does not exist\n\
         \n{PROMPT}'abc' is not a vertex index\n\
         \n{PROMPT}-1: loop finished\n"
    );
    assert_eq!(output, expected);
}

#[test]
fn console_stops_at_end_of_input() {
    let graph = common::setup();
    let output = common::console_output(&graph, "-5\n4");

    assert!(output.contains("index -5 does not exist"));
    assert!(output.contains("[4]500 color=Undiscovered"));
    assert!(output.contains("neighbors: 200 (3.50) 300 (4.50) 400 (5.50)"));
    assert!(!output.contains("loop finished"));
}

#[test]
fn console_shows_traversal_fields() {
    let mut graph = common::setup();
    let vertex = graph.vertex_at_mut(2);
    vertex.set_color(Color::Discovered);
    vertex.set_distance(Some(2));
    vertex.set_predecessor(Some(1));

    let output = common::console_output(&graph, "2\n-1\n");
    assert!(output.contains("[2]300 color=Discovered distance=2 predecessor=1"));
}

#[test]
fn load_edge_list_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("graph-demo-{}.txt", std::process::id()));
    fs::write(&path, "# sample\n1 2 0.5\n2 3\n3 1 2.0\n1 2 9.0\n").unwrap();

    let graph = load_graph(&path, GraphKind::Undirected).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(graph.size(), 3);
    assert_relative_eq!(graph.weight(&2, &1), 0.5);
    assert_eq!(graph.edge_weight(&3, &2), Some(0.0));
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn load_missing_file() {
    let path = PathBuf::from("/this/file/does/not/exist.txt");
    assert!(load_graph(&path, GraphKind::Directed).is_err());
}

#[test]
fn report_and_delete() {
    let graph = common::setup();
    let report = graph.to_string();

    assert_eq!(report.lines().count(), DEMO_VALUES.len() + 1);
    assert!(report.starts_with("[0]100=> (weight=0.50) 200 ->  (weight=1.50) 400 -> Nil\n"));
    assert!(report.ends_with("Nil\n\n"));

    graph.delete();
}
