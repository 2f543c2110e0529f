//! Job search aggregated over several public job boards.
//!
//! Every search fetches all registered providers concurrently, drops
//! postings older than the freshness window, applies the query and location
//! filters and returns the most recent matches. Nothing is stored between
//! searches.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod freshness;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod ranker;
pub mod routes;

pub use crate::error::SearchError;
pub use crate::models::job::Job;
pub use crate::models::search::{SearchRequest, SearchResults};
pub use crate::pipeline::JobSearch;
