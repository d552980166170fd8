//! Declared sidebar structure.

/// Explicit sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkItem {
    /// Display label.
    pub label: String,
    /// Link target as written by the author (e.g., `/guides/installation/`).
    pub link: String,
}

impl LinkItem {
    /// Create a link item.
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// Instruction to derive a group's links from a content directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutogenerateDirective {
    /// Directory relative to the content root (e.g., `reference`).
    pub directory: String,
}

/// What a sidebar group contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupContent {
    /// Links listed explicitly.
    Items(Vec<LinkItem>),
    /// Links computed from a content directory.
    Autogenerate(AutogenerateDirective),
}

/// One labelled sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroup {
    /// Group label. Not required to be unique.
    pub label: String,
    /// Group content.
    pub content: GroupContent,
}

impl SidebarGroup {
    /// Create a group with explicit links.
    pub fn items(label: impl Into<String>, items: Vec<LinkItem>) -> Self {
        Self {
            label: label.into(),
            content: GroupContent::Items(items),
        }
    }

    /// Create a group generated from a content directory.
    pub fn autogenerate(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: GroupContent::Autogenerate(AutogenerateDirective {
                directory: directory.into(),
            }),
        }
    }
}

/// Sidebar declaration: groups in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarSpec {
    /// Groups in declared order.
    pub groups: Vec<SidebarGroup>,
}

impl SidebarSpec {
    /// Create a sidebar from groups.
    #[must_use]
    pub fn new(groups: Vec<SidebarGroup>) -> Self {
        Self { groups }
    }
}
