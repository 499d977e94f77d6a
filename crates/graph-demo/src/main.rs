use std::{error::Error, io, path::PathBuf};

use adj_graph::GraphKind;
use clap::Parser;
use graph_demo::{
    console::run_console,
    demo::{demo_graph, load_graph},
};
use log::info;

#[derive(Parser)]
#[command(about = "Build a fixed capacity graph, print it and inspect its vertices")]
struct Cli {
    /// Edge list with one '<from> <to> [<weight>]' per line. Defaults to the built-in demo graph.
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Build a directed graph instead of an undirected one.
    #[arg(short, long)]
    directed: bool,

    /// Print the graph as JSON after the report.
    #[arg(short, long)]
    json: bool,

    /// Do not read vertex indices from stdin.
    #[arg(long)]
    no_console: bool,
}

fn init_tracing() -> Result<(), Box<dyn Error>> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing()?;

    let kind = if cli.directed {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    };

    let graph = match &cli.edges {
        Some(path) => load_graph(path, kind)?,
        None => {
            info!("Using the built-in demo graph");
            demo_graph(kind)?
        }
    };

    graph.print(0);

    if cli.edges.is_none() {
        println!(
            "weight between 400 and 500 is {:.2}",
            graph.weight(&400, &500)
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    }

    if !cli.no_console {
        run_console(&graph, io::stdin().lock(), &mut io::stdout().lock())?;
    }

    graph.delete();

    Ok(())
}
