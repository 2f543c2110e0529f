use std::sync::Arc;
use std::time::Duration;

use crate::error::ProviderError;
use crate::models::job::Job;
use crate::providers::{JobProvider, ProviderResult};

/// Merged output of one fan-out over every provider.
#[derive(Debug, Default)]
pub struct Aggregate {
    /// Jobs concatenated in provider registration order.
    pub jobs: Vec<Job>,
    pub any_failed: bool,
    pub all_failed: bool,
}

/// Run every provider concurrently and wait for all of them.
///
/// Each provider gets its own task and at most `timeout` to finish; a
/// timeout or a panicked task counts as a failed provider. An empty provider
/// list is reported as all failed.
pub async fn fetch_all(providers: &[Arc<dyn JobProvider>], timeout: Duration) -> Aggregate {
    let handles: Vec<_> = providers
        .iter()
        .map(|provider| {
            let provider = Arc::clone(provider);
            tokio::spawn(async move {
                match tokio::time::timeout(timeout, provider.fetch()).await {
                    Ok(result) => result,
                    Err(_) => {
                        let e = ProviderError::Timeout(timeout);
                        tracing::warn!("{} fetch failed: {e}", provider.name());
                        ProviderResult::Failed
                    }
                }
            })
        })
        .collect();

    // Awaiting in spawn order keeps results keyed by provider index.
    let mut results = Vec::with_capacity(handles.len());
    for (provider, handle) in providers.iter().zip(handles) {
        let result = handle.await.unwrap_or_else(|join_err| {
            let e = ProviderError::Aborted(join_err.to_string());
            tracing::warn!("{} fetch failed: {e}", provider.name());
            ProviderResult::Failed
        });
        results.push(result);
    }

    merge(results)
}

/// Concatenate provider results in order and compute the failure flags.
pub fn merge(results: Vec<ProviderResult>) -> Aggregate {
    let any_failed = results.iter().any(ProviderResult::failed);
    let all_failed = results.iter().all(ProviderResult::failed);
    let jobs = results
        .into_iter()
        .flat_map(ProviderResult::into_jobs)
        .collect();

    Aggregate {
        jobs,
        any_failed,
        all_failed,
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct Fixed {
        name: &'static str,
        delay: Duration,
        result: ProviderResult,
    }

    #[async_trait]
    impl JobProvider for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch(&self) -> ProviderResult {
            tokio::time::sleep(self.delay).await;
            self.result.clone()
        }
    }

    struct Panics;

    #[async_trait]
    impl JobProvider for Panics {
        fn name(&self) -> &str {
            "panics"
        }

        async fn fetch(&self) -> ProviderResult {
            panic!("decoder bug")
        }
    }

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: String::new(),
            salary: None,
            posted_date: "2024-01-01T00:00:00.000Z".to_string(),
            source: "Test".to_string(),
            apply_url: format!("https://example.com/{id}"),
            tags: vec![],
            remote: true,
            logo: None,
        }
    }

    fn provider(name: &'static str, delay_ms: u64, result: ProviderResult) -> Arc<dyn JobProvider> {
        Arc::new(Fixed {
            name,
            delay: Duration::from_millis(delay_ms),
            result,
        })
    }

    fn ids(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[tokio::test]
    async fn merges_in_registration_order_regardless_of_finish_order() {
        let providers = vec![
            provider("slow", 50, ProviderResult::Fetched(vec![job("a1"), job("a2")])),
            provider("fast", 0, ProviderResult::Fetched(vec![job("b1")])),
        ];
        let agg = fetch_all(&providers, Duration::from_secs(5)).await;
        assert_eq!(ids(&agg.jobs), ["a1", "a2", "b1"]);
        assert!(!agg.any_failed);
        assert!(!agg.all_failed);
    }

    #[tokio::test]
    async fn one_failure_is_partial() {
        let providers = vec![
            provider("down", 0, ProviderResult::Failed),
            provider("up", 0, ProviderResult::Fetched(vec![job("b1"), job("b2"), job("b3")])),
        ];
        let agg = fetch_all(&providers, Duration::from_secs(5)).await;
        assert_eq!(agg.jobs.len(), 3);
        assert!(agg.any_failed);
        assert!(!agg.all_failed);
    }

    #[tokio::test]
    async fn every_failure_is_total() {
        let providers = vec![
            provider("a", 0, ProviderResult::Failed),
            provider("b", 0, ProviderResult::Failed),
        ];
        let agg = fetch_all(&providers, Duration::from_secs(5)).await;
        assert!(agg.jobs.is_empty());
        assert!(agg.any_failed);
        assert!(agg.all_failed);
    }

    #[tokio::test]
    async fn providers_run_concurrently() {
        let providers: Vec<_> = (0..4)
            .map(|_| provider("sleepy", 200, ProviderResult::Fetched(vec![])))
            .collect();
        let started = std::time::Instant::now();
        fetch_all(&providers, Duration::from_secs(5)).await;
        assert!(started.elapsed() < Duration::from_millis(700));
    }

    #[tokio::test]
    async fn timeout_counts_as_failure() {
        let providers = vec![
            provider("hung", 10_000, ProviderResult::Fetched(vec![job("never")])),
            provider("ok", 0, ProviderResult::Fetched(vec![job("b1")])),
        ];
        let agg = fetch_all(&providers, Duration::from_millis(50)).await;
        assert_eq!(ids(&agg.jobs), ["b1"]);
        assert!(agg.any_failed);
        assert!(!agg.all_failed);
    }

    #[test]
    fn timeout_error_reports_sub_second_budget() {
        let e = ProviderError::Timeout(Duration::from_millis(250));
        assert_eq!(e.to_string(), "timed out after 250ms");
    }

    #[tokio::test]
    async fn panicking_provider_counts_as_failure() {
        let providers: Vec<Arc<dyn JobProvider>> = vec![
            Arc::new(Panics),
            provider("ok", 0, ProviderResult::Fetched(vec![job("b1")])),
        ];
        let agg = fetch_all(&providers, Duration::from_secs(5)).await;
        assert_eq!(ids(&agg.jobs), ["b1"]);
        assert!(agg.any_failed);
    }

    #[tokio::test]
    async fn no_providers_is_total_failure() {
        let agg = fetch_all(&[], Duration::from_secs(1)).await;
        assert!(agg.jobs.is_empty());
        assert!(agg.all_failed);
    }
}
