//! Lineage CLI — classify a parent→child edge list from a CSV/TSV file and
//! print the five relation counts per node.

use anyhow::Context;
use clap::Parser;
use lineage::{io as edge_io, RelationEngine};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lineage", version, about = "Graph-relation classifier")]
struct Cli {
    /// Edge-list file: one "parent,child" (or tab-separated) pair per line
    input: PathBuf,

    /// Output format
    #[arg(long, default_value = "csv")]
    format: OutputFormat,

    /// Spread per-node traversals across the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let edges = edge_io::read_edges_from_path(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let engine = RelationEngine::from_edges(&edges);
    let records = if cli.parallel {
        engine.compute_parallel()
    } else {
        engine.compute()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Csv => edge_io::write_csv(&mut out, &records)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
