use log::debug;
use serde::{Deserialize, Serialize};

use super::{Target, neighbor_list::NeighborList};
use crate::types::Color;

/// A vertex slot: the caller's value, its adjacency records and the
/// bookkeeping fields used by traversal algorithms.
///
/// The graph never touches `color`, `distance` or `predecessor` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<NV, EV> {
    value: NV,
    neighbors: Option<NeighborList<EV>>,
    color: Color,
    distance: Option<usize>,
    predecessor: Option<usize>,
}

impl<NV, EV> Vertex<NV, EV> {
    pub fn new(value: NV) -> Self {
        Self {
            value,
            neighbors: None,
            color: Color::default(),
            distance: None,
            predecessor: None,
        }
    }

    pub fn value(&self) -> &NV {
        &self.value
    }

    /// Adjacency records in insertion order.
    pub fn neighbors(&self) -> std::slice::Iter<'_, Target<EV>> {
        self.neighbors
            .as_ref()
            .map(NeighborList::iter)
            .unwrap_or_default()
    }

    /// The underlying list, `None` until the first edge is inserted.
    pub fn neighbor_list(&self) -> Option<&NeighborList<EV>> {
        self.neighbors.as_ref()
    }

    pub fn has_neighbor(&self, index: usize) -> bool {
        self.neighbors
            .as_ref()
            .is_some_and(|list| list.contains(index))
    }

    pub fn neighbor(&self, index: usize) -> Option<&Target<EV>> {
        self.neighbors.as_ref().and_then(|list| list.get(index))
    }

    pub fn degree(&self) -> usize {
        self.neighbors.as_ref().map_or(0, NeighborList::len)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    pub fn set_distance(&mut self, distance: Option<usize>) {
        self.distance = distance;
    }

    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    pub fn set_predecessor(&mut self, predecessor: Option<usize>) {
        self.predecessor = predecessor;
    }

    /// Back to undiscovered, unknown distance, no predecessor.
    pub fn reset_traversal(&mut self) {
        self.color = Color::default();
        self.distance = None;
        self.predecessor = None;
    }

    /// Appends `index` unless it is already a neighbor. The list is created
    /// on the first insertion.
    pub(crate) fn insert_neighbor(&mut self, index: usize, weight: EV) -> bool {
        let list = self.neighbors.get_or_insert_with(NeighborList::new);

        if list.contains(index) {
            debug!("neighbor with index {} already present, keeping old weight", index);
            return false;
        }

        list.push_back(index, weight);
        debug!("inserted neighbor with index {}", index);
        true
    }
}
