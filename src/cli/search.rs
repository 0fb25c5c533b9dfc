//! One-shot search and discover commands.

use anyhow::{Context, Result};

use cinetrend::app::SearchState;
use cinetrend::Config;

use super::{build_app, print_movies};

/// Search the catalog once and record the trending hit.
pub(crate) async fn cmd_search(query: String) -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let mut app = build_app(&config)?;
    app.run_search(&query).await;
    finish(app.state())
}

/// List popular movies without recording anything.
pub(crate) async fn cmd_discover() -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let mut app = build_app(&config)?;
    app.run_search("").await;
    finish(app.state())
}

fn finish(state: &SearchState) -> Result<()> {
    if let Some(error) = &state.error {
        eprintln!("{}", error);
        std::process::exit(1);
    }
    print_movies(&state.movies);
    Ok(())
}
