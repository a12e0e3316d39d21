use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routefinder_cli::commands::export::handle_export_command;
use routefinder_cli::commands::open_graph;
use routefinder_cli::commands::route::{handle_route_command, RouteCommandArgs};
use routefinder_cli::commands::show::handle_show_command;
use routefinder_cli::output::OutputFormat;
use routefinder_lib::{RouteAlgorithm, WeightMode};

/// Environment variable consulted when `--graph` is not given.
const GRAPH_ENV: &str = "ROUTEFINDER_GRAPH";

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest routes over weighted graphs")]
struct Cli {
    /// Graph file (text matrix, or `.json` document). Falls back to $ROUTEFINDER_GRAPH.
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Treat matrix values as presence flags and weight edges by Euclidean distance.
    #[arg(long, global = true)]
    unweighted: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two vertices.
    Route {
        /// Start vertex name.
        #[arg(long = "from")]
        from: String,
        /// Goal vertex name.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm: `ucs` or `a-star`.
        #[arg(long, default_value_t = RouteAlgorithm::Ucs)]
        algorithm: RouteAlgorithm,
    },
    /// Print the vertices, adjacency matrix and edge weights.
    Show,
    /// Write the graph as a JSON document.
    Export {
        /// Destination file; prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph_path = cli
        .graph
        .or_else(|| env::var_os(GRAPH_ENV).map(PathBuf::from))
        .ok_or_else(|| anyhow!("no graph file given; pass --graph or set {GRAPH_ENV}"))?;
    let mode = if cli.unweighted {
        WeightMode::Unweighted
    } else {
        WeightMode::Weighted
    };
    let graph = open_graph(&graph_path, mode)?;

    let rendered = match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
            };
            handle_route_command(&graph, &args, cli.format)?
        }
        Command::Show => handle_show_command(&graph, cli.format)?,
        Command::Export { output } => handle_export_command(&graph, output.as_deref())?,
    };

    print!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
