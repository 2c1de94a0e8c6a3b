//! CLI command implementations.

use crate::GraphArgs;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use strata_core::VertexId;
use strata_graph::{AnalyzerConfig, CentralityReport, Graph, GraphBuilder};
use tracing::{debug, info};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Analyzer settings from `--config`, then `--max-paths` and `--no-memo`.
pub fn load_config(args: &GraphArgs) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading analyzer config from {}", path.display());
            AnalyzerConfig::load(path)?
        }
        None => AnalyzerConfig::default(),
    };
    if let Some(limit) = args.max_paths {
        config = config.with_max_paths(limit);
    }
    if args.no_memo {
        config = config.with_memoize(false);
    }
    Ok(config)
}

/// Builds the graph selected by the command-line arguments.
///
/// With neither `--vertices` nor `--edges` this is the sample graph.
pub fn load_graph(args: &GraphArgs) -> Result<Graph> {
    let config = load_config(args)?;

    if args.vertices.is_empty() && args.edges.is_empty() {
        info!("No graph given, using the sample graph");
        return Ok(Graph::sample().with_config(config));
    }

    let graph = GraphBuilder::new()
        .add_vertices(args.vertices.iter().copied())
        .add_edges(args.edges.iter().copied())
        .config(config)
        .build()?;
    Ok(graph)
}

const DEMO_SOURCE: VertexId = 1;
const DEMO_DEST: VertexId = 4;

/// Walk through every query on the sample graph.
///
/// `--vertices` and `--edges` are ignored here; analyzer settings still apply.
pub fn demo(args: &GraphArgs) -> Result<()> {
    if !args.vertices.is_empty() || !args.edges.is_empty() {
        info!("demo always runs on the sample graph, ignoring --vertices/--edges");
    }
    let graph = Graph::sample().with_config(load_config(args)?);

    println!(
        "{} {} vertices, {} edges",
        "Graph:".cyan().bold(),
        graph.vertex_count(),
        graph.edge_count()
    );
    let edges: Vec<String> = graph.edges().iter().map(|e| e.to_string()).collect();
    println!("  {}", edges.join(" ").dimmed());

    println!("\n{} from {}", "Distances".cyan().bold(), DEMO_SOURCE);
    for &v in graph.vertices() {
        let d = graph.min_distance(DEMO_SOURCE, v)?;
        println!("  {} → {}: {}", DEMO_SOURCE, v, d.to_string().yellow());
    }

    println!(
        "\n{} {} → {}",
        "Shortest paths".cyan().bold(),
        DEMO_SOURCE,
        DEMO_DEST
    );
    for path in &graph.all_shortest_paths(DEMO_SOURCE, DEMO_DEST)? {
        println!("  {}", format_path(path));
    }

    let report = with_spinner("Computing betweenness...", || graph.centrality_report())?;
    println!();
    print_report(&report);

    Ok(())
}

/// Minimum distance between two vertices.
pub fn distance(args: &GraphArgs, from: VertexId, to: VertexId, json: bool) -> Result<()> {
    let graph = load_graph(args)?;
    let distance = graph.min_distance(from, to)?;

    if json {
        let output = serde_json::json!({
            "from": from,
            "to": to,
            "distance": distance,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} → {}: {}",
            "✓".green(),
            from,
            to,
            distance.to_string().cyan()
        );
    }

    Ok(())
}

/// Every shortest path between two vertices.
pub fn paths(args: &GraphArgs, from: VertexId, to: VertexId, json: bool) -> Result<()> {
    let graph = load_graph(args)?;
    let paths = graph.all_shortest_paths(from, to)?;

    if json {
        let output = serde_json::json!({
            "from": from,
            "to": to,
            "count": paths.len(),
            "paths": paths,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let edges = paths.first().map_or(0, |p| p.len().saturating_sub(1));
    println!(
        "Found {} shortest paths of length {}:\n",
        paths.len().to_string().cyan(),
        edges
    );
    for path in &paths {
        println!("  {}", format_path(path));
    }

    Ok(())
}

/// Distance levels from one vertex.
pub fn frontiers(args: &GraphArgs, source: VertexId, json: bool) -> Result<()> {
    let graph = load_graph(args)?;
    let frontiers = graph.frontiers_from(source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frontiers)?);
        return Ok(());
    }

    for (depth, level) in frontiers.levels().iter().enumerate() {
        let members: Vec<String> = level.iter().map(|v| v.to_string()).collect();
        println!("  {} {}", format!("{:>3}", depth).yellow(), members.join(", "));
    }

    let unreached = graph.vertex_count() - frontiers.reached();
    if unreached > 0 {
        println!(
            "\n{} {} vertices unreachable from {}",
            "⚠".yellow(),
            unreached,
            source
        );
    }

    Ok(())
}

/// Betweenness of a single vertex, or the full table.
pub fn centrality(
    args: &GraphArgs,
    vertex: Option<VertexId>,
    standardized: bool,
    json: bool,
) -> Result<()> {
    let graph = load_graph(args)?;

    let Some(vertex) = vertex else {
        let report = with_spinner("Computing betweenness...", || graph.centrality_report())?;
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
        return Ok(());
    };

    let (kind, score) = if standardized {
        ("standardized", graph.standardized_centrality(vertex)?)
    } else {
        ("betweenness", graph.betweenness_centrality(vertex)?)
    };

    if json {
        let output = serde_json::json!({ "vertex": vertex, "kind": kind, "score": score });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}: {}", kind, vertex, format!("{:.4}", score).cyan());
    }

    Ok(())
}

/// Vertices at the maximum betweenness.
pub fn top(args: &GraphArgs, json: bool) -> Result<()> {
    let graph = load_graph(args)?;
    let top = with_spinner("Computing betweenness...", || {
        graph.top_k_betweenness_centrality()
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else {
        let members: Vec<String> = top.iter().map(|v| v.to_string()).collect();
        println!("{} {{{}}}", "Top betweenness:".cyan().bold(), members.join(", "));
    }

    Ok(())
}

fn with_spinner<T>(
    message: &'static str,
    work: impl FnOnce() -> strata_core::Result<T>,
) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message);

    let result = work();
    spinner.finish_and_clear();
    Ok(result?)
}

fn print_report(report: &CentralityReport) {
    println!("{}", "Betweenness centrality".cyan().bold());
    println!("  {:>8}  {:>12}  {:>12}", "vertex", "raw", "standardized");
    for score in report.ranked() {
        let standardized = score
            .standardized
            .map_or_else(|| "-".to_string(), |s| format!("{:.4}", s));
        let line = format!(
            "  {:>8}  {:>12.4}  {:>12}",
            score.vertex, score.betweenness, standardized
        );
        if report.top.contains(&score.vertex) {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
    println!(
        "\n{} {} ({}ms)",
        "✓".green(),
        report.summary(),
        report.query_time_ms
    );
}

fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Edge;

    #[test]
    fn test_load_sample_by_default() {
        let graph = load_graph(&GraphArgs::default()).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert!(graph.config().memoize);
    }

    #[test]
    fn test_load_from_args() {
        let args = GraphArgs {
            vertices: vec![1, 2, 3],
            edges: vec![Edge::new(1, 2), Edge::new(2, 3)],
            max_paths: Some(4),
            no_memo: true,
            ..GraphArgs::default()
        };
        let graph = load_graph(&args).unwrap();
        assert_eq!(graph.vertices(), &[1, 2, 3]);
        assert_eq!(graph.config().max_paths, Some(4));
        assert!(!graph.config().memoize);
    }

    #[test]
    fn test_load_rejects_invalid_graph() {
        let args = GraphArgs {
            vertices: vec![1, 2],
            edges: vec![Edge::new(1, 5)],
            ..GraphArgs::default()
        };
        let err = load_graph(&args).unwrap_err();
        assert!(err.to_string().starts_with("invalid graph"));
    }

    #[test]
    fn test_demo_ignores_graph_args() {
        // Not a valid graph on its own; demo must not try to build it.
        let args = GraphArgs {
            vertices: vec![1, 2],
            edges: vec![Edge::new(1, 5)],
            no_memo: true,
            ..GraphArgs::default()
        };
        assert!(load_graph(&args).is_err());
        assert!(demo(&args).is_ok());
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let config = load_config(&GraphArgs {
            max_paths: Some(3),
            no_memo: true,
            ..GraphArgs::default()
        })
        .unwrap();
        assert_eq!(config.max_paths, Some(3));
        assert!(!config.memoize);
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[1, 5, 4]), "1 → 5 → 4");
    }
}
