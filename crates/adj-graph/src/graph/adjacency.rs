use std::fmt::{Debug, Display};

use log::{info, trace};
use num_traits::Zero;
use serde::Serialize;
use tracing::instrument;

use super::{Target, vertex::Vertex};
use crate::{Endpoint, Graph, GraphError, report::Report, types::GraphKind};

/// Fixed capacity graph stored as one adjacency list per vertex.
///
/// Vertices get their index in insertion order and keep it for the lifetime
/// of the graph; there is no removal of vertices or edges. Value based
/// operations resolve values to indices by a linear scan over the live
/// vertices, returning the first match when a value was inserted twice.
///
/// Not thread-safe. Vertex views borrow the graph and therefore cannot
/// outlive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyGraph<NV = i64, EV = f64> {
    vertices: Vec<Vertex<NV, EV>>,
    capacity: usize,
    kind: GraphKind,
}

impl<NV, EV> AdjacencyGraph<NV, EV> {
    /// Create an empty graph with room for exactly `capacity` vertices.
    pub fn new(capacity: usize, kind: GraphKind) -> Result<Self, GraphError> {
        if capacity == 0 {
            return Err(GraphError::ZeroCapacity);
        }

        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(capacity)
            .map_err(|_| GraphError::AllocationFailed(capacity))?;

        info!("Created {:?} graph (capacity: {})", kind, capacity);

        Ok(Self {
            vertices,
            capacity,
            kind,
        })
    }

    /// Number of vertex slots.
    pub fn size(&self) -> usize {
        self.capacity
    }

    /// Number of inserted vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Store `value` in the next free slot and return its index.
    pub fn add_vertex(&mut self, value: NV) -> Result<usize, GraphError> {
        if self.is_full() {
            return Err(GraphError::CapacityExceeded(self.capacity));
        }

        self.vertices.push(Vertex::new(value));
        Ok(self.vertices.len() - 1)
    }

    /// Value of the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not the index of an inserted vertex.
    pub fn data_at(&self, index: usize) -> &NV {
        self.vertex_at(index).value()
    }

    pub fn try_data_at(&self, index: usize) -> Result<&NV, GraphError> {
        self.try_vertex_at(index).map(Vertex::value)
    }

    /// # Panics
    ///
    /// Panics if `index` is not the index of an inserted vertex.
    pub fn vertex_at(&self, index: usize) -> &Vertex<NV, EV> {
        let len = self.len();
        assert!(
            index < len,
            "vertex index {} out of range (len: {})",
            index,
            len
        );
        &self.vertices[index]
    }

    pub fn try_vertex_at(&self, index: usize) -> Result<&Vertex<NV, EV>, GraphError> {
        let len = self.len();
        self.vertices
            .get(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// # Panics
    ///
    /// Panics if `index` is not the index of an inserted vertex.
    pub fn vertex_at_mut(&mut self, index: usize) -> &mut Vertex<NV, EV> {
        let len = self.len();
        assert!(
            index < len,
            "vertex index {} out of range (len: {})",
            index,
            len
        );
        &mut self.vertices[index]
    }

    pub fn try_vertex_at_mut(&mut self, index: usize) -> Result<&mut Vertex<NV, EV>, GraphError> {
        let len = self.len();
        self.vertices
            .get_mut(index)
            .ok_or(GraphError::IndexOutOfRange { index, len })
    }

    /// Live vertices in index order.
    pub fn vertices(&self) -> std::slice::Iter<'_, Vertex<NV, EV>> {
        self.vertices.iter()
    }

    /// Reset color, distance and predecessor of every live vertex.
    pub fn reset_traversal(&mut self) {
        self.vertices
            .iter_mut()
            .for_each(Vertex::reset_traversal);
    }

    /// Release the graph together with every neighbor list.
    pub fn delete(self) {
        info!(
            "Deleting graph ({} vertices, {} adjacency records)",
            self.len(),
            self.vertices.iter().map(Vertex::degree).sum::<usize>()
        );
    }

    fn link(&mut self, a: usize, b: usize, weight: EV) -> bool
    where
        EV: Copy,
    {
        let inserted = self.vertices[a].insert_neighbor(b, weight);

        if !self.kind.is_directed() {
            self.vertices[b].insert_neighbor(a, weight);
        }

        inserted
    }
}

impl<NV: PartialEq, EV> AdjacencyGraph<NV, EV> {
    /// Index of the first live vertex holding `value`.
    pub fn find_index(&self, value: &NV) -> Option<usize> {
        self.vertices.iter().position(|v| v.value() == value)
    }

    pub fn vertex_by_value(&self, value: &NV) -> Option<&Vertex<NV, EV>> {
        self.find_index(value).map(|i| &self.vertices[i])
    }

    pub fn has_edge(&self, from: &NV, to: &NV) -> bool {
        self.resolve(from, to)
            .is_ok_and(|(a, b)| self.vertices[a].has_neighbor(b))
    }

    fn resolve(&self, from: &NV, to: &NV) -> Result<(usize, usize), GraphError> {
        let from_idx = self.find_index(from);
        let to_idx = self.find_index(to);

        let missing = match (from_idx, to_idx) {
            (Some(a), Some(b)) => return Ok((a, b)),
            (None, Some(_)) => Endpoint::From,
            (Some(_), None) => Endpoint::To,
            (None, None) => Endpoint::Both,
        };
        trace!("edge endpoint lookup failed ({})", missing);

        Err(GraphError::EndpointNotFound(missing))
    }
}

impl<NV, EV> AdjacencyGraph<NV, EV>
where
    NV: PartialEq + Debug,
    EV: Copy + Zero + Debug,
{
    /// Insert an edge of weight zero between the vertices holding `from` and
    /// `to`.
    ///
    /// Returns `Ok(false)` if the edge already existed. Fails without touching
    /// the graph if either value is unknown.
    pub fn add_edge(&mut self, from: &NV, to: &NV) -> Result<bool, GraphError> {
        self.add_weighted_edge(from, to, EV::zero())
    }

    /// Like [`add_edge`](Self::add_edge) with an explicit weight. An existing
    /// edge keeps its original weight.
    #[instrument(level = "trace", skip(self))]
    pub fn add_weighted_edge(&mut self, from: &NV, to: &NV, weight: EV) -> Result<bool, GraphError> {
        let (a, b) = self.resolve(from, to)?;
        trace!("resolved edge {:?} -> {:?} to indices {} -> {}", from, to, a, b);

        Ok(self.link(a, b, weight))
    }

    /// Weight of the edge `from -> to`, zero if either vertex or the edge is
    /// missing.
    ///
    /// Zero is also a valid weight, so the result is ambiguous. Prefer
    /// [`edge_weight`](Self::edge_weight).
    pub fn weight(&self, from: &NV, to: &NV) -> EV {
        self.edge_weight(from, to).unwrap_or_else(EV::zero)
    }

    pub fn edge_weight(&self, from: &NV, to: &NV) -> Option<EV> {
        let (a, b) = self.resolve(from, to).ok()?;
        self.vertices[a].neighbor(b).map(|t| *t.weight())
    }
}

impl<NV: PartialEq + Display, EV: Copy + Display> AdjacencyGraph<NV, EV> {
    /// Write the adjacency report to stdout. `depth` is currently ignored.
    pub fn print(&self, depth: usize) {
        print!("{}", Report::new(self, depth));
    }
}

impl<NV: PartialEq + Display, EV: Copy + Display> Display for AdjacencyGraph<NV, EV> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Report::new(self, 0))
    }
}

impl<NV: PartialEq, EV: Copy> Graph for AdjacencyGraph<NV, EV> {
    type EV = EV;
    type NV = NV;

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn node_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<EV>>
    where
        EV: 'a,
    {
        self.vertices
            .get(node)
            .map(Vertex::neighbors)
            .unwrap_or_default()
    }

    fn degree(&self, node: usize) -> usize {
        self.vertices.get(node).map_or(0, Vertex::degree)
    }

    fn node_value(&self, node: usize) -> Option<&NV> {
        self.vertices.get(node).map(Vertex::value)
    }

    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a NV)>
    where
        NV: 'a,
    {
        self.vertices.iter().map(Vertex::value).enumerate()
    }

    fn find_node(&self, value: &NV) -> Option<usize> {
        self.find_index(value)
    }

    fn add_node(&mut self, value: NV) -> Result<usize, GraphError> {
        self.add_vertex(value)
    }

    fn insert_edge(&mut self, a: usize, b: usize, weight: EV) -> Result<bool, GraphError> {
        let len = self.len();
        if let Some(index) = [a, b].into_iter().find(|i| *i >= len) {
            return Err(GraphError::IndexOutOfRange { index, len });
        }

        Ok(self.link(a, b, weight))
    }
}
