//! Strata CLI - Command-line interface for Strata
//!
//! Runs shortest-path and centrality queries against a graph given on the
//! command line, or against the built-in sample graph when none is given.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use strata_core::{Edge, VertexId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "strata")]
#[command(author = "Strata Contributors")]
#[command(version)]
#[command(about = "Shortest paths and betweenness centrality for small graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    graph: GraphArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Which graph to analyze, and how.
#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Vertex ids, comma separated (e.g. 1,2,3). Omit with --edges to use the sample graph
    #[arg(long, global = true, value_delimiter = ',', allow_negative_numbers = true)]
    pub vertices: Vec<VertexId>,

    /// Edges as u:v pairs, comma separated (e.g. 1:2,2:3)
    #[arg(long, global = true, value_delimiter = ',', value_parser = parse_edge)]
    pub edges: Vec<Edge>,

    /// JSON file with analyzer settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail a query when a vertex pair holds more than this many paths
    #[arg(long, global = true)]
    pub max_paths: Option<usize>,

    /// Recompute every pair's paths instead of caching them within a pass
    #[arg(long, global = true)]
    pub no_memo: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the built-in six-vertex sample graph
    Demo,

    /// Minimum number of edges between two vertices
    Distance {
        from: VertexId,
        to: VertexId,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List every shortest path between two vertices
    Paths {
        from: VertexId,
        to: VertexId,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show breadth-first distance levels from a vertex
    Frontiers {
        source: VertexId,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Betweenness centrality of one vertex, or of every vertex
    Centrality {
        /// Vertex to score (defaults to all vertices)
        vertex: Option<VertexId>,

        /// Report the standardized score instead of the raw one
        #[arg(short, long)]
        standardized: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Vertices tied at the highest betweenness
    Top {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn parse_edge(s: &str) -> Result<Edge, String> {
    let (u, v) = s
        .split_once(':')
        .ok_or_else(|| format!("expected an edge like 1:2, got '{}'", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<VertexId>()
            .map_err(|e| format!("invalid vertex '{}' in edge '{}': {}", part, s, e))
    };
    Ok(Edge::new(parse(u)?, parse(v)?))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Demo => commands::demo(&cli.graph),
        Commands::Distance { from, to, json } => commands::distance(&cli.graph, from, to, json),
        Commands::Paths { from, to, json } => commands::paths(&cli.graph, from, to, json),
        Commands::Frontiers { source, json } => commands::frontiers(&cli.graph, source, json),
        Commands::Centrality {
            vertex,
            standardized,
            json,
        } => commands::centrality(&cli.graph, vertex, standardized, json),
        Commands::Top { json } => commands::top(&cli.graph, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
