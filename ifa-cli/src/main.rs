//! IFA CLI - Command line tool for querying the fish advisory backend.

use clap::{Parser, Subcommand};
use ifa_core::client::AdvisoryApi;

mod query;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(
    name = "ifa-cli",
    version,
    about = "Fish advisory backend query tool"
)]
struct Cli {
    /// Backend base URL (defaults to $BACKEND_URL, then localhost:8000)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available states
    States,

    /// List rivers for a state
    Rivers {
        /// State to scope the river list to
        #[arg(short, long)]
        state: String,
    },

    /// Fetch the advisory for a state and river
    Advisory {
        #[arg(short, long)]
        state: String,

        #[arg(short, long)]
        river: String,
    },

    /// Fetch heatmap risk points for a state and river
    Heatmap {
        #[arg(short, long)]
        state: String,

        #[arg(short, long)]
        river: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base_url = cli
        .base_url
        .or_else(|| std::env::var("BACKEND_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let api = AdvisoryApi::new(base_url);

    match cli.command {
        Command::States => query::run_states(&api).await,
        Command::Rivers { state } => query::run_rivers(&api, &state).await,
        Command::Advisory { state, river } => query::run_advisory(&api, &state, &river).await,
        Command::Heatmap { state, river } => query::run_heatmap(&api, &state, &river).await,
    }
}
