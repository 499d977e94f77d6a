use std::{fmt::Debug, hash::Hash};

use log::debug;
use num_traits::Zero;

use crate::{AdjacencyGraph, GraphError, input::edgelist::EdgeList, types::GraphKind};

pub struct Uninitialized {}

pub struct FromEdgeList<NV, EV> {
    edges: EdgeList<NV, EV>,
}

/// Builds an [`AdjacencyGraph`] sized to fit its input exactly.
#[derive(Debug)]
pub struct GraphBuilder<State> {
    kind: GraphKind,
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            state: Uninitialized {},
        }
    }

    pub fn edge_list<NV, EV>(self, edges: EdgeList<NV, EV>) -> GraphBuilder<FromEdgeList<NV, EV>> {
        GraphBuilder {
            kind: self.kind,
            state: FromEdgeList { edges },
        }
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl<NV, EV> GraphBuilder<FromEdgeList<NV, EV>>
where
    NV: Hash + Eq + Clone + Debug,
    EV: Copy + Zero + Debug,
{
    /// Vertices are inserted in order of first appearance, then the edges in
    /// list order. Fails with [`GraphError::ZeroCapacity`] on an empty list.
    pub fn build(self) -> Result<AdjacencyGraph<NV, EV>, GraphError> {
        let values = self.state.edges.vertex_values();
        let mut graph = AdjacencyGraph::new(values.len(), self.kind)?;

        for value in values {
            graph.add_vertex(value)?;
        }

        let mut duplicates = 0;
        for (from, to, weight) in self.state.edges.edges() {
            if !graph.add_weighted_edge(from, to, *weight)? {
                duplicates += 1;
            }
        }

        debug!(
            "Built graph from {} edges ({} duplicates skipped)",
            self.state.edges.len(),
            duplicates
        );

        Ok(graph)
    }
}
