use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use friend_graph_analyzer::cluster::metrics::clique_stats;
use friend_graph_analyzer::config::Config;
use friend_graph_analyzer::{connectors, data, report, shortest_chain};

#[derive(Parser, Debug)]
#[clap(
    name = "friend-graph-analyzer",
    about = "Shortest chains, school cliques and connectors in a friendship graph"
)]
struct Cli {
    /// Path to friendship text file
    #[clap(long)]
    input: String,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shortest chain of friends between two people
    Chain {
        from: String,
        to: String,
    },

    /// Cliques of students at a school
    Cliques {
        /// School name
        #[clap(required_unless_present = "all")]
        school: Option<String>,

        /// Report cliques for every school
        #[clap(long, conflicts_with = "school")]
        all: bool,
    },

    /// People whose removal would split the graph
    Connectors,

    /// Graph statistics
    Summary,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(args.threads, args.pretty);
    let num_threads = config.worker_threads();

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let graph = data::load_friend_data(&args.input)
        .with_context(|| format!("failed to load friendship graph from {}", args.input))?;

    let output = match &args.command {
        Command::Chain { from, to } => {
            let chain = shortest_chain(&graph, from, to)?;
            report::chain_report(from, to, chain.as_deref())
        }
        Command::Cliques { all: true, .. } => report::school_clique_report(&graph),
        Command::Cliques { school, .. } => {
            let school = school.as_deref().unwrap_or_default();
            report::clique_report(school, &clique_stats(&graph, school))
        }
        Command::Connectors => {
            let found = connectors(&graph);
            report::connector_report(found.as_deref())
        }
        Command::Summary => report::graph_summary(&graph),
    };

    let stdout = std::io::stdout();
    report::write_json(&mut stdout.lock(), &output, config.pretty)?;

    Ok(())
}
