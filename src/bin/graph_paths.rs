//! Loads a graph description and prints its breadth-first paths.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bacon_number::graphs::{
    breadth_first_paths, breadth_first_paths_from_first, DirectedGraph, Graph, Path,
    UndirectedGraph,
};
use bacon_number::loader::load_graph;

/// Breadth-first paths of a graph description file
#[derive(Parser, Debug)]
#[command(name = "graph-paths")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph description file
    graph: PathBuf,

    /// Treat edges as unordered links
    #[arg(short, long)]
    undirected: bool,

    /// Vertex id to start from, defaults to the first vertex
    #[arg(short, long)]
    root: Option<String>,
}

fn run<G: Graph + Default>(args: &Args) -> anyhow::Result<()> {
    let mut graph = G::default();
    let report = load_graph(&mut graph, &args.graph)
        .with_context(|| format!("loading graph from {}", args.graph.display()))?;
    if !report.is_complete() {
        warn!(
            vertices = report.vertices_loaded,
            expected_vertices = report.expected_vertices,
            edges = report.edges_loaded,
            expected_edges = report.expected_edges,
            malformed = report.malformed.len(),
            truncated = report.truncated,
            "graph only partially loaded"
        );
    }

    let paths: Vec<Path> = match &args.root {
        Some(root) => breadth_first_paths(&graph, root)
            .with_context(|| format!("root vertex {root:?} is not in the graph"))?,
        None => breadth_first_paths_from_first(&graph),
    };

    for path in &paths {
        println!("{}", path.ids(&graph).join(" "));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    if args.undirected {
        run::<UndirectedGraph>(&args)
    } else {
        run::<DirectedGraph>(&args)
    }
}
