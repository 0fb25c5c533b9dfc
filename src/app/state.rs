use crate::catalog::Movie;
use crate::store::TrendingRecord;

/// Everything a frontend needs to render the discovery screen.
///
/// The search flow and the trending flow fail independently, so each
/// carries its own loading flag and error slot. An error is the exact
/// message to show the user, already translated from the underlying
/// failure.
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    /// The raw term as typed, before normalization.
    pub search_term: String,
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub trending: Vec<TrendingRecord>,
    pub is_trending_loading: bool,
    pub trending_error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle_and_empty() {
        let state = SearchState::new();
        assert!(state.search_term.is_empty());
        assert!(state.movies.is_empty());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.trending.is_empty());
        assert!(!state.is_trending_loading);
        assert!(state.trending_error.is_none());
    }
}
