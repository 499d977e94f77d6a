//! Plain text adjacency report.
//!
//! One line per live vertex,
//! `[<index>]<value>=> (weight=<w>) <neighbor value> -> ... Nil`,
//! weights with two decimals, followed by an empty line.
use std::fmt::{self, Display, Formatter};

use crate::Graph;

pub struct Report<'a, G> {
    graph: &'a G,
    depth: usize,
}

impl<'a, G> Report<'a, G> {
    /// `depth` is reserved for more verbose reports and has no effect yet.
    pub fn new(graph: &'a G, depth: usize) -> Self {
        Self { graph, depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<G> Display for Report<'_, G>
where
    G: Graph,
    G::NV: Display,
    G::EV: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.graph.nodes_iter() {
            write!(f, "[{}]{}=>", index, value)?;

            for target in self.graph.neighbors(index) {
                write!(f, " (weight={:.2}) ", target.weight())?;
                match self.graph.node_value(target.index()) {
                    Some(neighbor) => write!(f, "{} -> ", neighbor)?,
                    None => write!(f, "? -> ")?,
                }
            }

            writeln!(f, "Nil")?;
        }

        writeln!(f)
    }
}
