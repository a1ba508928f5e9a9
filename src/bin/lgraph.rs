//! CLI entry point for the `lgraph` command-line tool.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use label_graph::cli::{commands, CliResult};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "Inspect edge-list files as undirected or directed graphs"
)]
struct Cli {
    /// Treat each `u v` line as the ordered edge u -> v
    #[arg(long, global = true)]
    directed: bool,

    /// Output format: "text" (default) or "json"
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the graph kind, node count and edge count
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List every node
    Nodes {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List every edge
    Edges {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List the neighbors (successors, with --directed) of a node
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node label
        node: String,
    },
    /// List the predecessors of a node (requires --directed)
    Predecessors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Node label
        node: String,
    },
    /// Check whether an edge exists
    HasEdge {
        /// Path to the edge-list file
        file: PathBuf,
        /// First (source) node label
        u: String,
        /// Second (target) node label
        v: String,
    },
}

fn run(cli: Cli, out: &mut impl Write) -> CliResult<()> {
    let json = cli.format == "json";
    let directed = cli.directed;

    match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, directed, out, json),
        Commands::Nodes { file } => commands::cmd_nodes(&file, directed, out, json),
        Commands::Edges { file } => commands::cmd_edges(&file, directed, out, json),
        Commands::Neighbors { file, node } => {
            commands::cmd_neighbors(&file, directed, &node, out, json)
        }
        Commands::Predecessors { file, node } => {
            commands::cmd_predecessors(&file, directed, &node, out, json)
        }
        Commands::HasEdge { file, u, v } => {
            commands::cmd_has_edge(&file, directed, &u, &v, out, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
