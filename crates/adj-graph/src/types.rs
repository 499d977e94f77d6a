use serde::{Deserialize, Serialize};

/// Governs whether edge insertion is mirrored on both endpoints.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum GraphKind {
    Directed,
    #[default]
    Undirected,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// Traversal marker for search algorithms built on top of the graph.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Undiscovered,
    Discovered,
    Visited,
}
