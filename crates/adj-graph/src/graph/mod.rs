use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub mod adjacency;
pub mod neighbor_list;
pub mod vertex;

/// One adjacency record: the index of a neighboring vertex and the weight of
/// the edge leading to it.
///
/// Equality and hashing only look at the neighbor index, so a set of targets
/// never holds the same neighbor twice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target<EV> {
    index: usize,
    weight: EV,
}

impl<EV> Target<EV> {
    pub fn new(index: usize, weight: EV) -> Target<EV> {
        Self { index, weight }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn weight(&self) -> &EV {
        &self.weight
    }
}

impl<EV: Copy> Target<EV> {
    pub fn as_pair(&self) -> (usize, EV) {
        (self.index, self.weight)
    }
}

impl<EV> Hash for Target<EV> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}

impl<EV> PartialEq for Target<EV> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<EV> Eq for Target<EV> {}
