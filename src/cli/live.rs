//! Live mode: an interactive, debounced search session.
//!
//! This is the UI simulation: every line typed feeds the debouncer, and a
//! query only hits the catalog once input has been quiet for the
//! configured delay. A typing burst of refined queries therefore costs one
//! request, and one trending hit, for its final form.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use cinetrend::app::{Debouncer, SearchState};
use cinetrend::Config;

use super::{build_app, print_movies, print_trending};

pub(crate) async fn cmd_live() -> Result<()> {
    let config = Config::load().with_context(|| "Failed to load configuration")?;
    let mut app = build_app(&config)?;

    println!("cinetrend live search");
    println!(
        "Type a query and press Enter; it dispatches after {}ms of quiet.",
        config.search.debounce_ms
    );
    println!("An empty line lists popular movies. 'quit' or Ctrl+D exits.");
    println!();

    // Initial load: popular movies and the current leaderboard.
    app.refresh_all().await;
    render_trending(app.state());
    render_results(app.state());

    let (debouncer, mut queries) = Debouncer::spawn(config.debounce_delay());
    let mut lines = spawn_stdin_reader();

    loop {
        tokio::select! {
            line = lines.recv() => {
                match line {
                    Some(line) => {
                        let input = line.trim();
                        if input == "quit" || input == "exit" {
                            println!("Goodbye!");
                            break;
                        }
                        debouncer.update(input)?;
                    }
                    None => {
                        // EOF
                        println!();
                        break;
                    }
                }
            }
            query = queries.recv() => {
                match query {
                    Some(query) => {
                        app.run_search(&query).await;
                        render_results(app.state());
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

/// Forward stdin lines onto a channel so the select loop never blocks on
/// the terminal.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

fn render_trending(state: &SearchState) {
    if let Some(error) = &state.trending_error {
        eprintln!(
            "[{}] {}",
            chrono::Local::now().format("%H:%M:%S"),
            error
        );
        return;
    }
    if !state.trending.is_empty() {
        print_trending(&state.trending);
        println!();
    }
}

fn render_results(state: &SearchState) {
    let stamp = chrono::Local::now().format("%H:%M:%S");
    if let Some(error) = &state.error {
        eprintln!("[{}] {}", stamp, error);
        return;
    }
    if state.search_term.is_empty() {
        println!("[{}] Popular movies:", stamp);
    } else {
        println!("[{}] Results for {:?}:", stamp, state.search_term);
    }
    print_movies(&state.movies);
    println!();
}
