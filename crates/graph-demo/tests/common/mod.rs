use adj_graph::{AdjacencyGraph, GraphKind};
use graph_demo::{console::run_console, demo::demo_graph};

pub fn setup() -> AdjacencyGraph {
    demo_graph(GraphKind::Undirected).unwrap()
}

/// Feed `input` to the console and return everything it wrote.
pub fn console_output(graph: &AdjacencyGraph, input: &str) -> String {
    let mut output = Vec::new();
    run_console(graph, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}
