use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::error::ProviderError;
use crate::models::job::Job;
use crate::providers::{FeedSpec, JobProvider, ProviderResult};

const USER_AGENT: &str = concat!("globejobs/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all feed adapters.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Adapter for a job board that serves its listings as one JSON document.
pub struct FeedProvider {
    spec: FeedSpec,
    endpoint: String,
    client: reqwest::Client,
}

impl FeedProvider {
    pub fn new(spec: FeedSpec, endpoint: String, client: reqwest::Client) -> Self {
        Self {
            spec,
            endpoint,
            client,
        }
    }

    async fn fetch_jobs(&self) -> Result<Vec<Job>, ProviderError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ProviderError::Status(resp.status()));
        }

        let body = resp.bytes().await?;
        Ok(self.spec.shape.map(&self.spec, &body)?)
    }
}

#[async_trait]
impl JobProvider for FeedProvider {
    fn name(&self) -> &str {
        self.spec.source
    }

    async fn fetch(&self) -> ProviderResult {
        match self.fetch_jobs().await {
            Ok(jobs) => {
                tracing::debug!("{} returned {} jobs", self.spec.source, jobs.len());
                ProviderResult::Fetched(jobs)
            }
            Err(e) => {
                tracing::warn!("{} fetch from {} failed: {e}", self.spec.source, self.endpoint);
                ProviderResult::Failed
            }
        }
    }
}
