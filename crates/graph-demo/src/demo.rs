use std::{error::Error, fs, path::Path};

use adj_graph::{
    AdjacencyGraph, GraphError, GraphKind, builder::GraphBuilder, input::edgelist::EdgeList,
};
use log::info;

pub const DEMO_VALUES: [i64; 5] = [100, 200, 300, 400, 500];

pub const DEMO_EDGES: [(i64, i64, f64); 6] = [
    (100, 200, 0.5),
    (100, 400, 1.5),
    (200, 300, 2.5),
    (200, 500, 3.5),
    (300, 500, 4.5),
    (400, 500, 5.5),
];

/// The built-in five vertex graph.
pub fn demo_graph(kind: GraphKind) -> Result<AdjacencyGraph, GraphError> {
    let mut graph = AdjacencyGraph::new(DEMO_VALUES.len(), kind)?;

    for value in DEMO_VALUES {
        graph.add_vertex(value)?;
    }

    // Prepare the traversal fields for search algorithms.
    graph.reset_traversal();

    for (from, to, weight) in DEMO_EDGES {
        graph.add_weighted_edge(&from, &to, weight)?;
    }

    Ok(graph)
}

/// Read an edge list file and build a graph holding exactly its vertices.
pub fn load_graph(path: &Path, kind: GraphKind) -> Result<AdjacencyGraph, Box<dyn Error>> {
    info!("Loading edge list from '{}'", path.display());

    let content = fs::read_to_string(path)?;
    let edges: EdgeList<i64, f64> = EdgeList::try_from(content.as_str())?;

    let mut graph = GraphBuilder::new(kind).edge_list(edges).build()?;
    graph.reset_traversal();

    info!(
        "Loaded graph: {} vertices, {} adjacency records",
        graph.len(),
        graph.vertices().map(|v| v.degree()).sum::<usize>()
    );

    Ok(graph)
}
