use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeDelta, Utc};

/// Maximum age of a posting that may still be returned.
pub const FRESHNESS_WINDOW_DAYS: i64 = 30;

pub fn retention_window() -> TimeDelta {
    TimeDelta::days(FRESHNESS_WINDOW_DAYS)
}

/// Parse a posting timestamp.
///
/// Accepts RFC 3339 (with offset), a naive `YYYY-MM-DDTHH:MM:SS[.f]` or
/// `YYYY-MM-DD HH:MM:SS[.f]` taken as UTC, or a bare `YYYY-MM-DD` date at
/// midnight UTC.
pub fn parse_posted_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a timestamp the way every `Job::posted_date` is stored.
pub fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize a provider's native date string, keeping it verbatim when it
/// cannot be parsed so the freshness check rejects it later.
pub fn normalize_posted_date(raw: &str) -> String {
    parse_posted_date(raw)
        .map(to_iso)
        .unwrap_or_else(|| raw.to_string())
}

/// True iff the posting is between zero and [`FRESHNESS_WINDOW_DAYS`] old.
/// Future-dated and unparseable postings are not fresh.
pub fn is_fresh(posted_date: &str, now: DateTime<Utc>) -> bool {
    parse_posted_date(posted_date).is_some_and(|posted| is_fresh_at(posted, now))
}

pub fn is_fresh_at(posted: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let age = now.signed_duration_since(posted);
    age >= TimeDelta::zero() && age <= retention_window()
}
