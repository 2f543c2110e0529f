use chrono::DateTime;
use serde::Deserialize;

use crate::freshness::to_iso;
use crate::models::job::Job;
use crate::providers::text::{non_empty, strip_html};
use crate::providers::{FeedSpec, NativeId, absolute_url, decode_object};

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    data: Vec<RawJob>,
}

#[derive(Debug, Deserialize)]
struct RawJob {
    slug: Option<NativeId>,
    title: Option<String>,
    company_name: Option<String>,
    location: Option<String>,
    description: Option<String>,
    /// Unix seconds.
    created_at: Option<i64>,
    remote: Option<bool>,
    tags: Option<Vec<String>>,
    url: Option<String>,
    company_logo: Option<String>,
}

/// Decode a `GET /api/job-board-api` response body.
pub fn map_payload(spec: &FeedSpec, body: &[u8]) -> Result<Vec<Job>, serde_json::Error> {
    let payload: Payload = decode_object(body)?;
    Ok(payload
        .data
        .into_iter()
        .filter_map(|raw| map_job(spec, raw))
        .collect())
}

fn map_job(spec: &FeedSpec, raw: RawJob) -> Option<Job> {
    let native_id = raw.slug?.into_string()?;
    let Some(apply_url) = absolute_url(raw.url) else {
        tracing::debug!("Skipping {} job {native_id}: no usable URL", spec.source);
        return None;
    };

    let remote = raw.remote.unwrap_or(false);
    let placeholder = if remote { "Remote" } else { "Not specified" };
    let location = non_empty(raw.location).unwrap_or_else(|| placeholder.to_string());

    // A missing or out-of-range timestamp leaves the date empty; the
    // freshness filter drops such postings.
    let posted_date = raw
        .created_at
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(to_iso)
        .unwrap_or_default();

    Some(Job {
        id: Job::new_id(spec.prefix, &native_id),
        title: non_empty(raw.title).unwrap_or_else(|| "Untitled".to_string()),
        company: non_empty(raw.company_name).unwrap_or_else(|| "Unknown".to_string()),
        location,
        description: strip_html(raw.description.as_deref().unwrap_or_default()),
        salary: None,
        posted_date,
        source: spec.source.to_string(),
        apply_url,
        tags: raw.tags.unwrap_or_default(),
        remote,
        logo: absolute_url(raw.company_logo),
    })
}
