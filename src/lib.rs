//! Cinetrend - movie discovery with trending-search aggregation

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod trending;

pub use config::Config;
pub use error::{CinetrendError, Result};
