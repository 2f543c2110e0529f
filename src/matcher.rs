use crate::models::job::Job;

/// Lower-cased search terms, prepared once per request.
///
/// Matching is plain substring containment: no tokenization, stemming or
/// fuzzy matching.
#[derive(Debug, Clone)]
pub struct SearchTerms {
    query: String,
    location: String,
}

impl SearchTerms {
    pub fn new(query: &str, location: &str) -> Self {
        Self {
            query: query.to_lowercase(),
            location: location.to_lowercase(),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.matches_query(job) && self.matches_location(job)
    }

    fn matches_query(&self, job: &Job) -> bool {
        let q = self.query.as_str();
        q.is_empty()
            || job.title.to_lowercase().contains(q)
            || job.company.to_lowercase().contains(q)
            || job.tags.iter().any(|tag| tag.to_lowercase().contains(q))
    }

    fn matches_location(&self, job: &Job) -> bool {
        let loc = self.location.as_str();
        loc.is_empty()
            || job.location.to_lowercase().contains(loc)
            || (job.remote && loc.contains("remote"))
    }
}

/// One-shot form of [`SearchTerms::matches`].
pub fn matches(job: &Job, query: &str, location: &str) -> bool {
    SearchTerms::new(query, location).matches(job)
}
