use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::aggregator;
use crate::error::SearchError;
use crate::freshness::is_fresh;
use crate::matcher::SearchTerms;
use crate::models::search::{SearchRequest, SearchResults};
use crate::providers::JobProvider;
use crate::ranker::rank;

/// Default per-provider time budget.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(15);

/// The search pipeline: fetch from every provider, then filter and rank.
///
/// Holds no per-request state; cloning is cheap and every call to
/// [`JobSearch::search`] fetches fresh data.
#[derive(Clone)]
pub struct JobSearch {
    providers: Arc<[Arc<dyn JobProvider>]>,
    timeout: Duration,
}

impl JobSearch {
    pub fn new(providers: Vec<Arc<dyn JobProvider>>) -> Self {
        Self {
            providers: providers.into(),
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults, SearchError> {
        self.search_at(request, Utc::now()).await
    }

    /// Same as [`JobSearch::search`] with an explicit clock for the freshness check.
    pub async fn search_at(
        &self,
        request: &SearchRequest,
        now: DateTime<Utc>,
    ) -> Result<SearchResults, SearchError> {
        let aggregate = aggregator::fetch_all(&self.providers, self.timeout).await;
        if aggregate.all_failed {
            return Err(SearchError::ProvidersUnavailable);
        }

        let fetched = aggregate.jobs.len();
        let terms = SearchTerms::new(&request.query, &request.location);

        let fresh: Vec<_> = aggregate
            .jobs
            .into_iter()
            .filter(|job| is_fresh(&job.posted_date, now))
            .collect();
        let fresh_count = fresh.len();

        let matched: Vec<_> = fresh.into_iter().filter(|job| terms.matches(job)).collect();
        let matched_count = matched.len();

        let jobs = rank(matched, request.limit);

        tracing::info!(
            "Search query={:?} location={:?}: {fetched} fetched, {fresh_count} fresh, {matched_count} matched, {} returned (partial: {})",
            request.query,
            request.location,
            jobs.len(),
            aggregate.any_failed
        );

        Ok(SearchResults {
            total: jobs.len(),
            jobs,
            partial_data: aggregate.any_failed,
        })
    }
}
