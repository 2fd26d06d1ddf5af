#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "hopscore: BFS shortest paths and closeness centrality",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Closeness score for every node of a sample graph",
        after_help = "EXAMPLES:\n    # Scores for the follower graph\n    hopscore scores\n\n    # Score only over reachable nodes, most central first\n    hopscore scores --sample follows --unreachable exclude --sort"
    )]
    Scores(cmd::scores::ScoresArgs),

    #[command(
        about = "Shortest path between two nodes of a sample graph",
        after_help = "EXAMPLES:\n    hopscore path --sample kingdom desert treasure"
    )]
    Path(cmd::path::PathArgs),

    #[command(about = "List the built-in sample graphs")]
    Samples,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HOPSCORE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "hopscore=debug,info"
        } else {
            "hopscore=info,warn"
        })
    });

    let format = env::var("HOPSCORE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_mode();
    debug!(command = ?cli.command, "dispatch");

    match cli.command {
        Commands::Scores(ref args) => cmd::scores::run_scores(args, output),
        Commands::Path(ref args) => cmd::path::run_path(args, output),
        Commands::Samples => cmd::samples::run_samples(output),
    }
}
