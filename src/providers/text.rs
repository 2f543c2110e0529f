use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Replace every `<...>` tag with a space, then collapse runs of whitespace.
pub fn strip_html(raw: &str) -> String {
    let without_tags = TAG.replace_all(raw, " ");
    WHITESPACE.replace_all(&without_tags, " ").trim().to_string()
}

/// Trimmed value, or `None` when missing or blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
