use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "cinetrend")]
#[command(about = "Movie discovery with trending-search tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and record the trending hit
    Search {
        /// Query text, as typed
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// List popular movies
    Discover,
    /// Show the top trending searches
    Trending,
    /// Interactive debounced search session
    Live,
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { query }) => cli::cmd_search(query.join(" ")).await?,
        Some(Commands::Discover) => cli::cmd_discover().await?,
        Some(Commands::Trending) => cli::cmd_trending().await?,
        Some(Commands::Live) | None => cli::cmd_live().await?,
        Some(Commands::Version) => {
            println!("cinetrend {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
