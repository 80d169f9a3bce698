//! Sage CLI
//!
//! # Commands
//!
//! - `ask <query...>`: answer one query and append its trace
//! - `chat`: interactive loop until `exit` or `quit`
//! - `scenarios`: run the assessment scenarios into an output directory

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sage_core::SageConfig;
use sage_pipeline::SageRuntime;
use tracing::debug;

mod commands;
mod corpus;
mod report;

/// Sage - staged retrieval and analysis over a small knowledge base
#[derive(Parser)]
#[command(name = "sage")]
#[command(version)]
#[command(about = "Staged retrieval and analysis over a small knowledge base")]
#[command(propagate_version = true)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON array of corpus entries (built-in mock corpus otherwise)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query
    Ask {
        /// Query text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Interactive question loop on stdin
    Chat,
    /// Run the assessment scenarios
    Scenarios {
        /// Directory receiving `<scenario>.txt` and `scenario_traces.jsonl`
        #[arg(long, default_value = "outputs")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = SageConfig::load(cli.config.as_deref()).context("loading configuration")?;
    sage_observability::tracing_setup::init(&config.observability, cli.verbose);

    let corpus = corpus::load(cli.corpus.as_deref())?;
    debug!(entries = corpus.len(), "corpus loaded");
    let runtime = SageRuntime::new(config, corpus);

    match cli.command {
        Commands::Ask { query } => commands::ask::run(&runtime, &query.join(" ")),
        Commands::Chat => commands::chat::run(&runtime),
        Commands::Scenarios { output_dir } => commands::scenarios::run(&runtime, &output_dir),
    }
}
