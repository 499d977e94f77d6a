//! Line based vertex inspection.
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

use adj_graph::{AdjacencyGraph, Vertex};
use log::debug;

pub const PROMPT: &str = "Vertex index: ";

/// Read one vertex index per line from `input` and describe that vertex on
/// `output`. Stops at `-1` or at the end of the input.
pub fn run_console<NV, EV, R, W>(
    graph: &AdjacencyGraph<NV, EV>,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    NV: Display,
    EV: Display,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let token = line.trim();
        let Ok(option) = token.parse::<i64>() else {
            writeln!(output, "'{}' is not a vertex index", token)?;
            continue;
        };

        if option == -1 {
            writeln!(output, "-1: loop finished")?;
            break;
        }

        let vertex = usize::try_from(option)
            .ok()
            .and_then(|index| graph.try_vertex_at(index).ok().map(|v| (index, v)));

        match vertex {
            Some((index, vertex)) => {
                debug!("Inspecting vertex {}", index);
                describe(graph, index, vertex, output)?;
            }
            None => writeln!(output, "index {} does not exist", option)?,
        }
    }

    Ok(())
}

fn describe<NV, EV, W>(
    graph: &AdjacencyGraph<NV, EV>,
    index: usize,
    vertex: &Vertex<NV, EV>,
    output: &mut W,
) -> io::Result<()>
where
    NV: Display,
    EV: Display,
    W: Write,
{
    writeln!(
        output,
        "[{}]{} color={:?} distance={} predecessor={}",
        index,
        vertex.value(),
        vertex.color(),
        or_dash(vertex.distance()),
        or_dash(vertex.predecessor()),
    )?;

    write!(output, "neighbors:")?;
    for target in vertex.neighbors() {
        write!(
            output,
            " {} ({:.2})",
            graph.data_at(target.index()),
            target.weight()
        )?;
    }
    writeln!(output)
}

fn or_dash(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
