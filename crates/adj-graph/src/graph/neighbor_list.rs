use serde::{Deserialize, Serialize};

use super::Target;

/// Ordered sequence of adjacency records owned by a single vertex.
///
/// The list itself enforces no uniqueness: `push_back` appends
/// unconditionally and callers check `contains` first. Traversal goes
/// through `iter`, which starts a fresh forward pass on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborList<EV> {
    targets: Vec<Target<EV>>,
}

impl<EV> NeighborList<EV> {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    pub fn push_back(&mut self, index: usize, weight: EV) {
        self.targets.push(Target::new(index, weight));
    }

    pub fn contains(&self, index: usize) -> bool {
        self.targets.iter().any(|t| t.index() == index)
    }

    /// Record for the neighbor at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Target<EV>> {
        self.targets.iter().find(|t| t.index() == index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target<EV>> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<EV> Default for NeighborList<EV> {
    fn default() -> Self {
        NeighborList::new()
    }
}

impl<'a, EV> IntoIterator for &'a NeighborList<EV> {
    type Item = &'a Target<EV>;
    type IntoIter = std::slice::Iter<'a, Target<EV>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
