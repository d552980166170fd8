//! Site base path handling.
//!
//! Every internal link in a resolved navigation tree is served under the
//! configured `base`. [`BasePath`] is passed into resolution explicitly so the
//! resolver stays a pure function of its arguments.

/// Normalized URL path prefix (`""` or `/segment[/segment...]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Create a base path, normalizing slashes.
    ///
    /// `""`, `"/"` and `"//"` all mean "no prefix"; `"docs/"` becomes `"/docs"`.
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Prefix as a string (empty when there is no prefix).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no prefix is configured.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether `link` already starts with this prefix on a segment boundary.
    #[must_use]
    pub fn is_prefixed(&self, link: &str) -> bool {
        if self.is_root() {
            return false;
        }
        link.strip_prefix(self.0.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?', '#']))
    }

    /// Apply the prefix to an internal link exactly once.
    ///
    /// External links and links already carrying the prefix are returned
    /// unchanged. Relative links are treated as site-root relative.
    #[must_use]
    pub fn apply(&self, link: &str) -> String {
        if is_external(link) || self.is_prefixed(link) {
            return link.to_owned();
        }
        let path = link.trim_start_matches('/');
        format!("{}/{path}", self.0)
    }

    /// Remove the prefix from a link, if present.
    #[must_use]
    pub fn strip<'a>(&self, link: &'a str) -> &'a str {
        if self.is_prefixed(link) {
            &link[self.0.len()..]
        } else {
            link
        }
    }
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Check whether a link points outside the site.
///
/// A link is external when it has a URL scheme (`https:`, `mailto:`) or is
/// protocol-relative (`//host/path`).
#[must_use]
pub fn is_external(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_slashes() {
        assert_eq!(BasePath::new("/ignition-tfpl").as_str(), "/ignition-tfpl");
        assert_eq!(BasePath::new("ignition-tfpl/").as_str(), "/ignition-tfpl");
        assert_eq!(BasePath::new("/a/b/").as_str(), "/a/b");
        assert!(BasePath::new("").is_root());
        assert!(BasePath::new("/").is_root());
    }

    #[test]
    fn test_apply_prefixes_internal_links() {
        let base = BasePath::new("/ignition-tfpl");
        assert_eq!(
            base.apply("/guides/installation/"),
            "/ignition-tfpl/guides/installation/"
        );
        assert_eq!(base.apply("reference/x"), "/ignition-tfpl/reference/x");
        assert_eq!(base.apply("/"), "/ignition-tfpl/");
    }

    #[test]
    fn test_apply_never_double_prefixes() {
        let base = BasePath::new("/ignition-tfpl");
        let once = base.apply("/guides/installation/");
        assert_eq!(base.apply(&once), once);
        assert_eq!(base.apply("/ignition-tfpl"), "/ignition-tfpl");
    }

    #[test]
    fn test_apply_requires_segment_boundary() {
        let base = BasePath::new("/docs");
        assert_eq!(base.apply("/docs-old/page/"), "/docs/docs-old/page/");
    }

    #[test]
    fn test_apply_leaves_external_links() {
        let base = BasePath::new("/ignition-tfpl");
        assert_eq!(
            base.apply("https://github.com/apollogeddon/ignition-tfpl"),
            "https://github.com/apollogeddon/ignition-tfpl"
        );
        assert_eq!(base.apply("//cdn.example.com/x"), "//cdn.example.com/x");
        assert_eq!(base.apply("mailto:team@example.com"), "mailto:team@example.com");
    }

    #[test]
    fn test_apply_with_root_base() {
        let base = BasePath::default();
        assert_eq!(base.apply("/guides/"), "/guides/");
        assert_eq!(base.apply("guides/"), "/guides/");
    }

    #[test]
    fn test_strip_removes_prefix() {
        let base = BasePath::new("/ignition-tfpl");
        assert_eq!(base.strip("/ignition-tfpl/guides/"), "/guides/");
        assert_eq!(base.strip("/guides/"), "/guides/");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com"));
        assert!(is_external("http://example.com/a"));
        assert!(is_external("mailto:x@y.z"));
        assert!(is_external("//example.com"));
        assert!(!is_external("/guides/installation/"));
        assert!(!is_external("guides/installation"));
        assert!(!is_external("/a:b"));
    }

    #[test]
    fn test_display() {
        assert_eq!(BasePath::new("").to_string(), "/");
        assert_eq!(BasePath::new("/x/").to_string(), "/x");
    }
}
