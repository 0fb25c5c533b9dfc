//! Application layer: UI state, the search and trending flows, and input
//! debouncing.

mod debounce;
mod flow;
mod state;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use flow::{DiscoveryApp, SEARCH_ERROR_MESSAGE, TRENDING_ERROR_MESSAGE};
pub use state::SearchState;
