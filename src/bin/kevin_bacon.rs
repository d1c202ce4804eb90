//! Prints the Bacon number of every actor in a credit file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bacon_number::bacon::{
    assign_bacon_numbers, collaboration_graph, BaconConfig, Filmography, DEFAULT_ROOT,
};

/// Bacon numbers from an `actor|movie` credit list
#[derive(Parser, Debug)]
#[command(name = "kevin-bacon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Credit file, one `actor|movie` line per appearance
    credits: PathBuf,

    /// Actor every distance is measured from
    #[arg(short, long, default_value = DEFAULT_ROOT, env = "BACON_ROOT")]
    root: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = BaconConfig { root: args.root };

    let films = Filmography::open(&args.credits)
        .with_context(|| format!("loading credits from {}", args.credits.display()))?;
    if !films.skipped_lines().is_empty() {
        info!(skipped = films.skipped_lines().len(), "some credit lines were ignored");
    }

    let mut graph = collaboration_graph(&films);
    let numbers = assign_bacon_numbers(&mut graph, &config.root)
        .with_context(|| format!("root actor {:?} is not in the credit list", config.root))?;

    print!("{numbers}");
    println!("{}", "-".repeat(59));
    // The root always has Bacon number 0, so there is a maximum.
    if let Some(max) = numbers.max_finite() {
        println!("Farthest from {}:", config.root);
        for name in numbers.farthest() {
            println!("{name}, with a Bacon number of {max}");
        }
    }

    Ok(())
}
