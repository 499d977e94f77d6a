use std::{error::Error, fmt::Display};

use graph::Target;

pub use graph::{adjacency::AdjacencyGraph, neighbor_list::NeighborList, vertex::Vertex};
pub use report::Report;
pub use types::{Color, GraphKind};

pub mod builder;
pub mod graph;
pub mod input;
pub mod report;
pub mod types;

/// Which endpoint of an edge could not be resolved to a vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
    Both,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::From => write!(f, "source"),
            Self::To => write!(f, "target"),
            Self::Both => write!(f, "source and target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    ZeroCapacity,
    AllocationFailed(usize),
    CapacityExceeded(usize),
    EndpointNotFound(Endpoint),
    IndexOutOfRange { index: usize, len: usize },
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "graph capacity must be greater than 0"),
            Self::AllocationFailed(capacity) => {
                write!(f, "could not allocate {} vertex slots", capacity)
            }
            Self::CapacityExceeded(capacity) => {
                write!(f, "graph is full (capacity: {})", capacity)
            }
            Self::EndpointNotFound(endpoint) => {
                write!(f, "{} vertex of the edge not found in graph", endpoint)
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {} out of range (len: {})", index, len)
            }
        }
    }
}

/// Index based view on a graph.
///
/// Vertices are addressed by their insertion index. Value based operations
/// live on the concrete graph types, which resolve values to indices and then
/// go through this interface.
pub trait Graph {
    type EV;
    type NV;

    /// Number of vertex slots. Fixed for the lifetime of the graph.
    fn capacity(&self) -> usize;

    /// Number of inserted vertices.
    fn node_count(&self) -> usize;

    /// Number of adjacency records. An undirected edge between two distinct
    /// vertices is stored, and counted, twice.
    fn edge_count(&self) -> usize;

    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<Self::EV>>
    where
        Self::EV: 'a;

    fn degree(&self, node: usize) -> usize;

    fn node_value(&self, node: usize) -> Option<&Self::NV>;

    /// Returns an Iterator over all live nodes.
    ///
    /// The Iterator yields pairs `(i, val)`, where `i` is the index
    /// of the node and `val` the data accociated with that node.
    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a Self::NV)>
    where
        Self::NV: 'a;

    /// Index of the first node holding `value`.
    fn find_node(&self, value: &Self::NV) -> Option<usize>;

    fn add_node(&mut self, value: Self::NV) -> Result<usize, GraphError>;

    /// Records `b` as neighbor of `a` (and `a` of `b` if undirected).
    ///
    /// Returns `Ok(false)` when the record was already present, in which case
    /// the stored weight is left untouched.
    fn insert_edge(&mut self, a: usize, b: usize, weight: Self::EV) -> Result<bool, GraphError>;
}
