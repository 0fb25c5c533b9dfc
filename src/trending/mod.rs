//! Trending-search subsystem: canonical search terms plus the
//! popularity tracker that counts them.

mod normalize;
mod tracker;

pub use normalize::normalize;
pub use tracker::{TrendingTracker, TRENDING_LIMIT};
