use std::cmp::Reverse;

use crate::freshness::parse_posted_date;
use crate::models::job::Job;

/// Sort by posting date, newest first, and keep at most `limit` jobs.
///
/// The sort is stable, so jobs with equal dates stay in merge order.
/// Unparseable dates sort last.
pub fn rank(mut jobs: Vec<Job>, limit: usize) -> Vec<Job> {
    jobs.sort_by_cached_key(|job| Reverse(parse_posted_date(&job.posted_date)));
    jobs.truncate(limit);
    jobs
}
