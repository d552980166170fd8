//! Content discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use docsite_nav::ContentEntry;

use crate::front_matter::{FrontMatter, parse_front_matter, split_front_matter};
use crate::title::{extract_h1, title_from_path};

/// File extensions recognised as pages.
const PAGE_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Walks a content directory and builds [`ContentEntry`] values.
///
/// - `index.md` becomes the page for its directory (`guides/index.md` -> `guides`)
/// - other pages map to `dir/stem` (`guides/setup.md` -> `guides/setup`)
/// - hidden files and directories (leading `.`) are skipped
pub struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a scanner rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Content root directory.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Scan the content directory.
    ///
    /// Returns an empty list if the directory doesn't exist. Entries are
    /// sorted by path, then by source file, so the snapshot is independent of
    /// directory order. Two files mapping to one path (`guides.md` and
    /// `guides/index.md`) are both returned and reported with a warning.
    #[must_use]
    pub fn scan(&self) -> Vec<ContentEntry> {
        let mut pages = Vec::new();
        if self.source_dir.is_dir() {
            scan_directory(&self.source_dir, "", &mut pages);
        } else {
            tracing::warn!(dir = %self.source_dir.display(), "Content directory not found");
        }
        pages.sort_by(|a, b| {
            a.entry
                .path
                .cmp(&b.entry.path)
                .then_with(|| a.source.cmp(&b.source))
        });

        for pair in pages.windows(2) {
            if pair[0].entry.path == pair[1].entry.path {
                tracing::warn!(
                    path = %pair[0].entry.path,
                    first = %pair[0].source.display(),
                    second = %pair[1].source.display(),
                    "Two pages map to the same path"
                );
            }
        }

        tracing::debug!(count = pages.len(), "Scanned content collection");
        pages.into_iter().map(|page| page.entry).collect()
    }
}

/// Entry paired with the file it was read from.
struct ScannedPage {
    source: PathBuf,
    entry: ContentEntry,
}

fn scan_directory(dir: &Path, url_prefix: &str, pages: &mut Vec<ScannedPage>) {
    let Ok(read_dir) = fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "Failed to read content directory");
        return;
    };

    for entry in read_dir.filter_map(Result::ok) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            let child_url = join_url(url_prefix, &name);
            scan_directory(&path, &child_url, pages);
            continue;
        }

        let Some(stem) = page_stem(&path) else {
            continue;
        };
        let url_path = if stem.eq_ignore_ascii_case("index") {
            url_prefix.to_owned()
        } else {
            join_url(url_prefix, stem)
        };

        if let Some(entry) = build_entry(&path, url_path) {
            pages.push(ScannedPage {
                source: path,
                entry,
            });
        }
    }
}

/// File stem for recognised page files.
fn page_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if !PAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
        return None;
    }
    path.file_stem()?.to_str()
}

fn join_url(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}

/// Read a page and build its entry. Unreadable files are skipped.
fn build_entry(path: &Path, url_path: String) -> Option<ContentEntry> {
    let content = fs::read_to_string(path)
        .inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read page");
        })
        .ok()?;

    let (yaml, body) = split_front_matter(&content);
    let front_matter = yaml
        .map(|yaml| {
            parse_front_matter(yaml).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Invalid front matter, ignoring");
                FrontMatter::default()
            })
        })
        .unwrap_or_default();

    let title = front_matter
        .title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| extract_h1(body))
        .unwrap_or_else(|| title_from_path(&url_path));

    let mut entry = ContentEntry::new(url_path, title);
    entry.order = front_matter.sidebar.order;
    entry.hidden = front_matter.sidebar.hidden;
    Some(entry)
}
