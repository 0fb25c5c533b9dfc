//! Trending leaderboard command.

use anyhow::{Context, Result};

use cinetrend::trending::TrendingTracker;
use cinetrend::Config;

use super::{build_store, print_trending};

/// Print the top trending searches.
pub(crate) async fn cmd_trending() -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let tracker = TrendingTracker::new(build_store(&config));

    match tracker.snapshot().await {
        Ok(records) if records.is_empty() => {
            println!("No trending searches yet.");
            Ok(())
        }
        Ok(records) => {
            print_trending(&records);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
