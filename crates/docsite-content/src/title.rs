//! Page title derivation.

use std::sync::LazyLock;

use regex::Regex;

static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());

/// Extract the text of the first `# ` heading.
pub(crate) fn extract_h1(body: &str) -> Option<String> {
    let caps = H1_REGEX.captures(body)?;
    let title = caps[1].trim();
    (!title.is_empty()).then(|| title.to_owned())
}

/// Derive a title from a URL path's last segment.
///
/// Falls back to "Home" for the root path.
pub(crate) fn title_from_path(url_path: &str) -> String {
    match url_path.rsplit_once('/').map_or(url_path, |(_, last)| last) {
        "" => "Home".to_owned(),
        slug => titlecase_from_slug(slug),
    }
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
