//! CLI entry point for the `adjgraph` demo tool.

use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::{commands, Sample};
use adjgraph::graph::TraversalOrder;
use adjgraph::{GraphConfig, GraphError};

#[derive(Parser)]
#[command(
    name = "adjgraph",
    about = "adjgraph CLI — build a sample graph and inspect or traverse it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Sample graph: "basic" or "weighted"
    #[arg(long, default_value = "weighted")]
    sample: String,

    /// Store every edge in both directions
    #[arg(long)]
    undirected: bool,

    /// Drop edge weights (all weights read as 0)
    #[arg(long)]
    unweighted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node list and every edge
    Show,
    /// Print every node with its index and neighbor count
    Nodes,
    /// Print every stored edge
    Edges,
    /// Traverse the graph and print nodes in visitation order
    Traverse {
        /// Order: dfs or bfs
        #[arg(default_value = "bfs")]
        order: String,
        /// Start position (defaults to index 0)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Look up the edge between two node positions
    Edge {
        /// Source position
        from: usize,
        /// Target position
        to: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let sample = match Sample::from_name(&cli.sample) {
        Some(sample) => sample,
        None => {
            eprintln!("Invalid sample: {}", cli.sample);
            process::exit(3);
        }
    };
    let config = GraphConfig::new(!cli.undirected, !cli.unweighted);
    log::info!("building {} sample as a {} graph", sample, config);

    let result = sample.build(config).and_then(|graph| match cli.command {
        Commands::Show => commands::cmd_show(&graph, json),
        Commands::Nodes => commands::cmd_nodes(&graph, json),
        Commands::Edges => commands::cmd_edges(&graph, json),
        Commands::Traverse { order, start } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&graph, order, start, json)
        }
        Commands::Edge { from, to } => commands::cmd_edge(&graph, from, to, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::EmptyGraph => 2,
            GraphError::IndexOutOfRange { .. } | GraphError::NotAMember(_) => 4,
        };
        process::exit(code);
    }
}
