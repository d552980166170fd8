//! Sidebar resolution.
//!
//! [`resolve`] walks a [`SidebarSpec`] in declared order and produces a
//! [`NavigationTree`]:
//!
//! - Explicit links are checked against the [`ContentIndex`]. Missing targets
//!   stay in the tree and are reported as [`UnresolvedLink`].
//! - Autogenerate directives expand to the directory's own page and every page
//!   beneath it, ordered by position hint, then unpositioned entries, ties
//!   broken by path.
//! - Groups sharing a label are kept apart.
//!
//! Resolution is pure: same inputs, same tree.

use std::cmp::Ordering;
use std::fmt;

use crate::base::{BasePath, is_external};
use crate::content::{ContentEntry, ContentIndex, normalize_path};
use crate::sidebar::{AutogenerateDirective, GroupContent, LinkItem, SidebarGroup, SidebarSpec};
use crate::tree::{NavGroup, NavLink, NavigationTree};

/// Explicit link whose target is not in the content collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedLink {
    /// Label of the group owning the link.
    pub group: String,
    /// Link label.
    pub label: String,
    /// Link target exactly as declared.
    pub target: String,
}

impl fmt::Display for UnresolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unresolved link '{}' ({}) in group '{}'",
            self.target, self.label, self.group
        )
    }
}

/// Navigation tree resolved with warnings.
///
/// Carries the full tree alongside the problems so callers can decide
/// whether to proceed.
#[derive(Debug, thiserror::Error)]
#[error("{} unresolved link(s) in navigation", .problems.len())]
pub struct NavigationResolutionError {
    /// Collected problems in tree order.
    pub problems: Vec<UnresolvedLink>,
    /// Tree with unresolved links retained.
    pub tree: NavigationTree,
}

/// Output of [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved tree.
    pub tree: NavigationTree,
    /// Problems found during resolution (empty when clean).
    pub problems: Vec<UnresolvedLink>,
}

impl Resolution {
    /// True when resolution produced problems.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.problems.is_empty()
    }

    /// Convert into a result, failing when any problem was found.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationResolutionError`] carrying the problems and the tree.
    pub fn into_result(self) -> Result<NavigationTree, NavigationResolutionError> {
        if self.problems.is_empty() {
            Ok(self.tree)
        } else {
            Err(NavigationResolutionError {
                problems: self.problems,
                tree: self.tree,
            })
        }
    }
}

/// Resolve a sidebar declaration against a content snapshot.
///
/// Internal link targets are prefixed with `base` exactly once.
#[must_use]
pub fn resolve(spec: &SidebarSpec, index: &ContentIndex, base: &BasePath) -> Resolution {
    let mut problems = Vec::new();
    let groups = spec
        .groups
        .iter()
        .map(|group| resolve_group(group, index, base, &mut problems))
        .collect();

    if !problems.is_empty() {
        tracing::warn!(count = problems.len(), "Navigation resolved with warnings");
    }

    Resolution {
        tree: NavigationTree { groups },
        problems,
    }
}

fn resolve_group(
    group: &SidebarGroup,
    index: &ContentIndex,
    base: &BasePath,
    problems: &mut Vec<UnresolvedLink>,
) -> NavGroup {
    let items: Vec<NavLink> = match &group.content {
        GroupContent::Items(items) => items
            .iter()
            .map(|item| resolve_item(&group.label, item, index, base, problems))
            .collect(),
        GroupContent::Autogenerate(directive) => autogenerate(directive, index, base),
    };

    tracing::debug!(group = %group.label, links = items.len(), "Resolved sidebar group");

    NavGroup {
        label: group.label.clone(),
        items,
    }
}

fn resolve_item(
    group: &str,
    item: &LinkItem,
    index: &ContentIndex,
    base: &BasePath,
    problems: &mut Vec<UnresolvedLink>,
) -> NavLink {
    if is_external(&item.link) {
        return NavLink {
            label: item.label.clone(),
            href: item.link.clone(),
            external: true,
        };
    }

    let target = lookup_path(base.strip(&item.link));
    if !index.contains(target) {
        tracing::warn!(group, link = %item.link, "Sidebar link target not found");
        problems.push(UnresolvedLink {
            group: group.to_owned(),
            label: item.label.clone(),
            target: item.link.clone(),
        });
    }

    NavLink {
        label: item.label.clone(),
        href: base.apply(&item.link),
        external: false,
    }
}

fn autogenerate(
    directive: &AutogenerateDirective,
    index: &ContentIndex,
    base: &BasePath,
) -> Vec<NavLink> {
    let mut entries: Vec<&ContentEntry> = index
        .in_directory(&directive.directory)
        .filter(|entry| !entry.hidden)
        .collect();

    if entries.is_empty() {
        tracing::debug!(directory = %directive.directory, "Autogenerate matched no content");
    }

    entries.sort_by(|a, b| compare_entries(a, b));

    entries
        .into_iter()
        .map(|entry| NavLink {
            label: entry.title.clone(),
            href: base.apply(&format!("/{}/", entry.path)),
            external: false,
        })
        .collect()
}

/// Positioned entries first (ascending), then unpositioned; ties by path.
fn compare_entries(a: &ContentEntry, b: &ContentEntry) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.path.cmp(&b.path))
}

/// Reduce a link target to its content path (no query, fragment, or slashes).
fn lookup_path(link: &str) -> &str {
    let end = link.find(['?', '#']).unwrap_or(link.len());
    normalize_path(&link[..end])
}
