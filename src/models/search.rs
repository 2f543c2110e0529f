use serde::{Deserialize, Serialize};

use crate::freshness::FRESHNESS_WINDOW_DAYS;
use crate::models::job::Job;

/// Upper bound on the number of jobs a single search may return.
pub const MAX_LIMIT: usize = 100;

/// Limit applied when the caller does not supply one.
pub const DEFAULT_LIMIT: usize = 30;

/// A caller-constructed search. `limit` is expected to be clamped already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub location: String,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, location: impl Into<String>, limit: usize) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
            limit,
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new("", "", DEFAULT_LIMIT)
    }
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub jobs: Vec<Job>,
    pub total: usize,
    /// At least one provider failed while at least one succeeded.
    pub partial_data: bool,
}

/// Raw query parameters accepted by `GET /api/jobs`.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub limit: Option<String>,
}

/// JSON body returned to callers on success.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    pub success: bool,
    pub jobs: Vec<Job>,
    pub total: usize,
    pub freshness_window_days: i64,
    pub partial_data: bool,
}

impl From<SearchResults> for SearchEnvelope {
    fn from(results: SearchResults) -> Self {
        Self {
            success: true,
            jobs: results.jobs,
            total: results.total,
            freshness_window_days: FRESHNESS_WINDOW_DAYS,
            partial_data: results.partial_data,
        }
    }
}

/// Clamp a caller-supplied limit to `[1, MAX_LIMIT]`.
///
/// Missing or blank input falls back to [`DEFAULT_LIMIT`]. Fractional values
/// are truncated. Returns `None` when the input is not a number; of the
/// non-finite spellings only `Infinity` / `-Infinity` count as numbers.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Some(DEFAULT_LIMIT),
        Some("Infinity" | "+Infinity") => f64::INFINITY,
        Some("-Infinity") => f64::NEG_INFINITY,
        Some(s) => s.parse::<f64>().ok().filter(|v| v.is_finite())?,
    };

    Some(value.clamp(1.0, MAX_LIMIT as f64) as usize)
}
