// Provider adapters: one `JobProvider` per external job board.
// The built-in boards are rows in `FEEDS`; a new board with a known payload
// shape needs only a new row.

pub mod arbeitnow;
pub mod feed;
pub mod remotive;
pub mod text;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::models::job::Job;
use crate::providers::feed::FeedProvider;

/// Trait that all job providers must implement.
///
/// `fetch` never fails outward: transport, status and payload errors are
/// logged and reported as [`ProviderResult::Failed`].
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Human-readable provider name, used as `Job::source`.
    fn name(&self) -> &str;

    async fn fetch(&self) -> ProviderResult;
}

/// Outcome of one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResult {
    Fetched(Vec<Job>),
    Failed,
}

impl ProviderResult {
    pub fn failed(&self) -> bool {
        matches!(self, ProviderResult::Failed)
    }

    pub fn into_jobs(self) -> Vec<Job> {
        match self {
            ProviderResult::Fetched(jobs) => jobs,
            ProviderResult::Failed => Vec::new(),
        }
    }
}

/// Decoder for a provider's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedShape {
    Remotive,
    Arbeitnow,
}

impl FeedShape {
    pub fn map(self, spec: &FeedSpec, body: &[u8]) -> Result<Vec<Job>, serde_json::Error> {
        match self {
            FeedShape::Remotive => remotive::map_payload(spec, body),
            FeedShape::Arbeitnow => arbeitnow::map_payload(spec, body),
        }
    }
}

/// Static description of one job board.
#[derive(Debug, Clone, Copy)]
pub struct FeedSpec {
    /// Value for `Job::source`.
    pub source: &'static str,
    /// Prepended to the provider's native id.
    pub prefix: &'static str,
    pub endpoint: &'static str,
    pub shape: FeedShape,
}

pub const REMOTIVE: FeedSpec = FeedSpec {
    source: "Remotive",
    prefix: "remotive",
    endpoint: "https://remotive.com/api/remote-jobs",
    shape: FeedShape::Remotive,
};

pub const ARBEITNOW: FeedSpec = FeedSpec {
    source: "Arbeitnow",
    prefix: "arbeitnow",
    endpoint: "https://www.arbeitnow.com/api/job-board-api",
    shape: FeedShape::Arbeitnow,
};

/// Registration order; also the merge order of results.
pub const FEEDS: &[FeedSpec] = &[REMOTIVE, ARBEITNOW];

/// Build one adapter per registered feed, honoring endpoint overrides.
pub fn registry(client: &reqwest::Client, config: &Config) -> Vec<Arc<dyn JobProvider>> {
    FEEDS
        .iter()
        .map(|spec| {
            let endpoint = config
                .endpoint_override(spec.prefix)
                .unwrap_or(spec.endpoint)
                .to_string();
            Arc::new(FeedProvider::new(*spec, endpoint, client.clone())) as Arc<dyn JobProvider>
        })
        .collect()
}

/// Native ids arrive as numbers from some boards and strings from others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum NativeId {
    Number(u64),
    Text(String),
}

impl NativeId {
    pub(crate) fn into_string(self) -> Option<String> {
        match self {
            NativeId::Number(n) => Some(n.to_string()),
            NativeId::Text(s) => text::non_empty(Some(s)),
        }
    }
}

/// Decode a feed body whose top level must be a JSON object.
///
/// Derived struct deserializers also accept sequences, so `[]` would
/// otherwise pass as an empty feed.
pub(crate) fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
    serde_json::from_value(serde_json::Value::Object(object))
}

/// Only absolute http(s) URLs are usable as `apply_url` or `logo`.
pub(crate) fn absolute_url(value: Option<String>) -> Option<String> {
    let value = text::non_empty(value)?;
    match reqwest::Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_prefixes_are_unique() {
        let mut prefixes: Vec<_> = FEEDS.iter().map(|f| f.prefix).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), FEEDS.len());
    }

    #[test]
    fn failed_result_has_no_jobs() {
        assert!(ProviderResult::Failed.failed());
        assert!(ProviderResult::Failed.into_jobs().is_empty());
        assert!(!ProviderResult::Fetched(vec![]).failed());
    }

    #[test]
    fn top_level_must_be_an_object() {
        #[derive(Debug, Deserialize)]
        struct Feed {
            #[serde(default)]
            #[allow(dead_code)]
            jobs: Vec<u64>,
        }

        assert!(decode_object::<Feed>(b"{}").is_ok());
        assert!(decode_object::<Feed>(b"[]").is_err());
        assert!(decode_object::<Feed>(b"[[1, 2]]").is_err());
        assert!(decode_object::<Feed>(b"null").is_err());
    }

    #[test]
    fn relative_urls_are_rejected() {
        assert_eq!(absolute_url(Some("/jobs/1".to_string())), None);
        assert_eq!(absolute_url(Some("mailto:hr@acme.io".to_string())), None);
        assert_eq!(
            absolute_url(Some("https://acme.io/jobs/1".to_string())),
            Some("https://acme.io/jobs/1".to_string())
        );
    }
}
