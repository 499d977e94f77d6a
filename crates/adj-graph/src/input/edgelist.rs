use std::{error::Error, fmt::Display, hash::Hash, slice::Iter, str::FromStr};

use num_traits::Zero;
use rustc_hash::FxHashSet;

/// Edges given by vertex values, in file order.
///
/// Text format: one edge per line, `<from> <to> [<weight>]`, separated by
/// whitespace. A missing weight is zero. Empty lines and lines starting with
/// `#` are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList<NV, EV> {
    edges: Box<[(NV, NV, EV)]>,
}

impl<NV, EV> EdgeList<NV, EV> {
    pub fn new(edges: Vec<(NV, NV, EV)>) -> Self {
        Self {
            edges: edges.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> Iter<'_, (NV, NV, EV)> {
        self.edges.iter()
    }
}

impl<NV: Hash + Eq + Clone, EV> EdgeList<NV, EV> {
    /// Distinct vertex values in order of first appearance.
    pub fn vertex_values(&self) -> Vec<NV> {
        let mut seen = FxHashSet::default();
        self.edges
            .iter()
            .flat_map(|(s, t, _)| [s, t])
            .filter(|value| seen.insert(*value))
            .cloned()
            .collect()
    }
}

fn parse_token<T>(token: Option<&str>, line: usize, name: &str) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Display,
{
    let token = token.ok_or_else(|| format!("line {}: no {} found", line, name))?;
    T::from_str(token)
        .map_err(|e| format!("line {}: invalid {} '{}': {}", line, name, token, e).into())
}

impl<NV, EV> TryFrom<&str> for EdgeList<NV, EV>
where
    NV: FromStr,
    NV::Err: Display,
    EV: FromStr + Zero,
    EV::Err: Display,
{
    type Error = Box<dyn Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result = vec![];

        for (number, line) in value.lines().enumerate() {
            let number = number + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();

            let source = parse_token(tokens.next(), number, "source")?;
            let target = parse_token(tokens.next(), number, "target")?;
            let weight = match tokens.next() {
                Some(token) => parse_token(Some(token), number, "weight")?,
                None => EV::zero(),
            };

            if let Some(extra) = tokens.next() {
                return Err(format!("line {}: unexpected token '{}'", number, extra).into());
            }

            result.push((source, target, weight));
        }

        Ok(EdgeList::new(result))
    }
}
