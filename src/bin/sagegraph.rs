//! Sagegraph CLI: query the concept graph from the command line.
//!
//! Usage:
//!   sagegraph subgraph [--center id] [--depth n]
//!   sagegraph path <from> <to>
//!   sagegraph search <text>
//!   sagegraph details <id>
//!   sagegraph relations <id>
//!
//! Results are printed to stdout as JSON. Provenance and any degradation
//! warning go to stderr.

use clap::{Parser, Subcommand};
use sagegraph::logging;
use sagegraph::{EngineConfig, GraphRepository, NodeId, Resolved};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sagegraph",
    version,
    about = "Explore a graph of philosophical concepts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to the durable cache database
    #[arg(long, global = true)]
    cache_db: Option<PathBuf>,
    /// Never contact the concept service
    #[arg(long, global = true)]
    offline: bool,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Neighborhood of a concept, or the whole graph without --center
    Subgraph {
        #[arg(long)]
        center: Option<String>,
        /// Hops from the center; 0 or less returns the whole graph
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i32>,
    },
    /// Shortest connecting path between two concepts
    Path { from: String, to: String },
    /// Concepts whose name, description, or quotes contain the text
    Search { text: String },
    /// Detail view of one concept
    Details { id: String },
    /// Relations touching one concept
    Relations { id: String },
}

fn load_config(cli: &Cli) -> Result<EngineConfig, String> {
    let mut config =
        EngineConfig::load(cli.config.as_deref()).map_err(|e| format!("{}", e))?;
    if cli.offline {
        config.remote.enabled = false;
    }
    if let Some(path) = &cli.cache_db {
        config.cache.path = Some(path.clone());
    }
    Ok(config)
}

/// Print the value as JSON and report provenance on stderr
fn emit<T: Serialize>(resolved: Resolved<T>) -> i32 {
    eprintln!("source: {}", resolved.provenance);
    if let Some(warning) = &resolved.warning {
        eprintln!("Warning: {}", warning);
    }
    match serde_json::to_string_pretty(&resolved.value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_subgraph(repo: &GraphRepository, center: Option<String>, depth: Option<i32>) -> i32 {
    let resolved = repo.get_subgraph(center.map(NodeId::from), depth).await;
    emit(resolved)
}

async fn cmd_path(repo: &GraphRepository, from: &str, to: &str) -> i32 {
    let resolved = repo.find_path(&from.into(), &to.into()).await;
    if resolved.value.is_empty() {
        eprintln!("No path between '{}' and '{}'", from, to);
    }
    emit(resolved)
}

async fn cmd_search(repo: &GraphRepository, text: &str) -> i32 {
    emit(repo.search(text).await)
}

async fn cmd_details(repo: &GraphRepository, id: &str) -> i32 {
    let resolved = repo.concept_details(&id.into()).await;
    if resolved.value.is_none() {
        eprintln!("Error: concept '{}' not found", id);
        return 1;
    }
    emit(resolved)
}

async fn cmd_relations(repo: &GraphRepository, id: &str) -> i32 {
    emit(repo.concept_relations(&id.into()).await)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging_with(cli.verbose.then_some("sagegraph=debug"));

    let repo = match load_config(&cli).and_then(|config| {
        GraphRepository::from_config(&config).map_err(|e| format!("{}", e))
    }) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Subgraph { center, depth } => cmd_subgraph(&repo, center, depth).await,
        Commands::Path { from, to } => cmd_path(&repo, &from, &to).await,
        Commands::Search { text } => cmd_search(&repo, &text).await,
        Commands::Details { id } => cmd_details(&repo, &id).await,
        Commands::Relations { id } => cmd_relations(&repo, &id).await,
    };
    std::process::exit(code);
}
