use serde::{Deserialize, Serialize};

/// A job posting normalized from one provider's feed.
///
/// Built once per aggregation and never mutated afterwards; the filter and
/// ranking stages only select and reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// `<provider-prefix>-<provider-native-id>`
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    /// UTC ISO-8601 timestamp, or the provider's raw value if it could not be parsed.
    pub posted_date: String,
    pub source: String,
    pub apply_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub remote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Job {
    pub fn new_id(prefix: &str, native_id: &str) -> String {
        format!("{prefix}-{native_id}")
    }
}
