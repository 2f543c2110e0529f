use serde::Deserialize;

use crate::freshness::normalize_posted_date;
use crate::models::job::Job;
use crate::providers::text::{non_empty, strip_html};
use crate::providers::{FeedSpec, NativeId, absolute_url, decode_object};

/// Every Remotive posting is remote; this stands in for a missing location.
const DEFAULT_LOCATION: &str = "Worldwide";

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    jobs: Vec<RawJob>,
}

#[derive(Debug, Deserialize)]
struct RawJob {
    id: Option<NativeId>,
    title: Option<String>,
    company_name: Option<String>,
    candidate_required_location: Option<String>,
    description: Option<String>,
    publication_date: Option<String>,
    salary: Option<String>,
    url: Option<String>,
    company_logo_url: Option<String>,
    company_logo: Option<String>,
    tags: Option<Vec<String>>,
}

/// Decode a `GET /api/remote-jobs` response body.
///
/// Entries without an id or an absolute apply URL are skipped.
pub fn map_payload(spec: &FeedSpec, body: &[u8]) -> Result<Vec<Job>, serde_json::Error> {
    let payload: Payload = decode_object(body)?;
    Ok(payload
        .jobs
        .into_iter()
        .filter_map(|raw| map_job(spec, raw))
        .collect())
}

fn map_job(spec: &FeedSpec, raw: RawJob) -> Option<Job> {
    let native_id = raw.id?.into_string()?;
    let Some(apply_url) = absolute_url(raw.url) else {
        tracing::debug!("Skipping {} job {native_id}: no usable URL", spec.source);
        return None;
    };

    Some(Job {
        id: Job::new_id(spec.prefix, &native_id),
        title: non_empty(raw.title).unwrap_or_else(|| "Untitled".to_string()),
        company: non_empty(raw.company_name).unwrap_or_else(|| "Unknown".to_string()),
        location: non_empty(raw.candidate_required_location)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        description: strip_html(raw.description.as_deref().unwrap_or_default()),
        salary: non_empty(raw.salary),
        posted_date: normalize_posted_date(raw.publication_date.as_deref().unwrap_or_default()),
        source: spec.source.to_string(),
        apply_url,
        tags: raw.tags.unwrap_or_default(),
        remote: true,
        logo: absolute_url(raw.company_logo_url).or_else(|| absolute_url(raw.company_logo)),
    })
}
