//! Content collection snapshot.
//!
//! Paths follow the URL path convention used throughout docsite: no leading
//! or trailing slash, `""` for the home page, `"guides/installation"` for
//! `guides/installation.md`.

use std::collections::BTreeMap;

use serde::Serialize;

/// One page from the content collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    /// URL path without leading or trailing slash.
    pub path: String,
    /// Page title (front matter, H1 heading, or filename).
    pub title: String,
    /// Explicit position hint for autogenerated groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Excluded from autogenerated groups.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl ContentEntry {
    /// Create a visible entry without a position hint.
    ///
    /// The path is normalized (surrounding slashes removed).
    pub fn new(path: impl AsRef<str>, title: impl Into<String>) -> Self {
        Self {
            path: normalize_path(path.as_ref()).to_owned(),
            title: title.into(),
            order: None,
            hidden: false,
        }
    }

    /// Set the position hint.
    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Mark the entry as hidden from autogenerated groups.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Immutable snapshot of the content collection keyed by URL path.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    entries: BTreeMap<String, ContentEntry>,
}

impl ContentIndex {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by URL path (slashes are ignored).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&ContentEntry> {
        self.entries.get(normalize_path(path))
    }

    /// Check whether a URL path exists.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Entries belonging to `directory`: its own page (`reference/index.md`
    /// maps to `reference`) followed by every entry beneath it.
    ///
    /// An empty directory matches every entry except the home page.
    pub fn in_directory<'a>(
        &'a self,
        directory: &str,
    ) -> impl Iterator<Item = &'a ContentEntry> + use<'a> {
        let dir = normalize_path(directory);
        let (own, prefix) = if dir.is_empty() {
            (None, String::new())
        } else {
            (self.entries.get(dir), format!("{dir}/"))
        };
        let nested = self
            .entries
            .range(prefix.clone()..)
            .take_while(move |(path, _)| path.starts_with(&prefix))
            .map(|(_, entry)| entry)
            .filter(|entry| !entry.path.is_empty());
        own.into_iter().chain(nested)
    }

    /// Iterate entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.values()
    }
}

impl FromIterator<ContentEntry> for ContentIndex {
    /// Build an index; a later entry with the same path replaces the earlier one.
    fn from_iter<I: IntoIterator<Item = ContentEntry>>(iter: I) -> Self {
        let mut entries = BTreeMap::new();
        for mut entry in iter {
            let key = normalize_path(&entry.path).to_owned();
            entry.path.clone_from(&key);
            if let Some(previous) = entries.insert(key, entry) {
                tracing::warn!(path = %previous.path, "Duplicate content path, keeping last entry");
            }
        }
        Self { entries }
    }
}

/// Strip surrounding slashes from a URL path.
pub(crate) fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}
