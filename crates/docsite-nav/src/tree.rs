//! Resolved navigation tree.

use serde::Serialize;

/// Resolved sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Final link target, base-prefixed for internal links.
    pub href: String,
    /// True for links pointing outside the site.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

/// Resolved sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Group label.
    pub label: String,
    /// Links in display order.
    pub items: Vec<NavLink>,
}

/// Navigation tree ready for rendering.
///
/// Every autogenerate directive has been replaced by concrete links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavigationTree {
    /// Groups in declared order.
    pub groups: Vec<NavGroup>,
}

impl NavigationTree {
    /// Total number of links across all groups.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }
}
