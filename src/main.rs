use std::io;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use densegraph::export::{self, AnalysisReport, ExportFormat};
use densegraph::graph::Graph;

#[derive(Parser)]
#[command(name = "densegraph")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(
    about = "Weighted digraph analysis: traversal, connectivity, Floyd, Dijkstra and Prim",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors (the report is still written to stdout)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format: text, json, csv or markdown
    #[arg(short, long, global = true, default_value = "text")]
    format: ExportFormat,

    /// Maximum number of nodes, at most 4096 (defaults to the number of nodes given)
    #[arg(long, allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Add a node; may be repeated
    #[arg(long = "node", value_name = "NAME")]
    nodes: Vec<String>,

    /// Add a directed edge as FROM:TO:WEIGHT; endpoints are created as needed
    #[arg(long = "edge", value_name = "FROM:TO:WEIGHT", value_parser = parse_edge)]
    edges: Vec<EdgeArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node counts, drain/source nodes, cycles and connectivity
    Summary,
    /// Traverse the graph from a start node
    Traverse {
        /// Start node
        #[arg(short, long)]
        start: String,

        /// Breadth-first instead of depth-first
        #[arg(short, long)]
        breadth: bool,
    },
    /// All-pairs minimum costs (Floyd–Warshall)
    Floyd {
        /// Stop after this many intermediate-node rounds
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Count hops instead of summing weights
        #[arg(long)]
        hops: bool,
    },
    /// Minimum path between two nodes
    Path {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },
    /// Single-source minimum costs (Dijkstra)
    Dijkstra {
        /// Source node
        #[arg(short, long)]
        start: String,

        /// Count hops instead of summing weights
        #[arg(long)]
        hops: bool,
    },
    /// Minimum spanning tree (Prim)
    Prim {
        /// Start node
        #[arg(short, long)]
        start: String,

        /// Mirror every edge before building the tree
        #[arg(short, long)]
        undirected: bool,
    },
    /// Node with the smallest eccentricity
    Center,
}

/// A directed edge given on the command line.
#[derive(Debug, Clone)]
struct EdgeArg {
    from: String,
    to: String,
    weight: f64,
}

fn parse_edge(value: &str) -> Result<EdgeArg, String> {
    let parts: Vec<&str> = value.rsplitn(2, ':').collect();
    let (weight, endpoints) = match parts.as_slice() {
        [weight, endpoints] => (*weight, *endpoints),
        _ => return Err(format!("expected FROM:TO:WEIGHT, got '{}'", value)),
    };
    let Some((from, to)) = endpoints.split_once(':') else {
        return Err(format!("expected FROM:TO:WEIGHT, got '{}'", value));
    };
    if from.is_empty() || to.is_empty() {
        return Err(format!("empty endpoint in '{}'", value));
    }
    let weight = weight
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{}': {}", weight, e))?;

    Ok(EdgeArg {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn build_graph(cli: &Cli) -> Result<Graph<String>> {
    let mut names = cli.nodes.clone();
    for edge in &cli.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !names.contains(endpoint) {
                names.push(endpoint.clone());
            }
        }
    }

    let capacity = cli.capacity.unwrap_or(names.len() as i64);
    let mut graph = Graph::try_with_capacity(capacity)?;
    for name in names {
        graph
            .add_node(name.clone())
            .with_context(|| format!("while adding node '{}'", name))?;
    }
    for edge in &cli.edges {
        graph
            .add_edge(&edge.from, &edge.to, edge.weight)
            .with_context(|| format!("while adding edge {}->{}", edge.from, edge.to))?;
    }

    debug!(
        nodes = graph.size(),
        edges = graph.edge_count(),
        capacity = graph.capacity(),
        "graph built"
    );
    Ok(graph)
}

fn run(cli: &Cli) -> Result<()> {
    let mut graph = build_graph(cli)?;

    let report = match &cli.command {
        Commands::Summary => AnalysisReport::new(&graph),
        Commands::Traverse { start, breadth } => {
            let (kind, order) = if *breadth {
                ("breadth-first", graph.traverse_breadth_first(start)?)
            } else {
                ("depth-first", graph.traverse_depth_first(start)?)
            };
            AnalysisReport::new(&graph).with_traversal(kind, &order)
        }
        Commands::Floyd { iterations, hops } => {
            let result = match (iterations, hops) {
                (_, true) => graph.floyd_hops(),
                (Some(k), false) => graph.floyd_iterations(*k),
                (None, false) => graph.floyd(),
            };
            AnalysisReport::new(&graph).with_floyd(&result)
        }
        Commands::Path { from, to } => {
            let floyd = graph.floyd();
            let Some(path) = floyd.path(from, to)? else {
                bail!("no path from '{}' to '{}'", from, to);
            };
            AnalysisReport::new(&graph).with_path(&path)
        }
        Commands::Dijkstra { start, hops } => {
            let result = if *hops {
                graph.dijkstra_hops(start)?
            } else {
                graph.dijkstra(start)?
            };
            AnalysisReport::new(&graph).with_dijkstra(&result)
        }
        Commands::Prim { start, undirected } => {
            if *undirected {
                graph.make_bidirectional();
            }
            let tree = graph.prim(start)?;
            AnalysisReport::new(&graph).with_spanning_tree(&tree)
        }
        Commands::Center => {
            let center = graph.center()?;
            AnalysisReport::new(&graph).with_center(&center)
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    export::export(cli.format, &report, &mut handle).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
