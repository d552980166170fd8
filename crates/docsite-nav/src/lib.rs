//! Navigation tree resolution for docsite.
//!
//! Merges a declared sidebar (explicit link groups and autogenerate
//! directives) with a snapshot of the content collection into one ordered
//! [`NavigationTree`].
//!
//! # Example
//!
//! ```
//! use docsite_nav::{BasePath, ContentEntry, ContentIndex, LinkItem, SidebarGroup, SidebarSpec, resolve};
//!
//! let index: ContentIndex = [
//!     ContentEntry::new("guides/installation", "Installation"),
//!     ContentEntry::new("reference/api", "API").with_order(1),
//! ]
//! .into_iter()
//! .collect();
//!
//! let spec = SidebarSpec::new(vec![
//!     SidebarGroup::items("Guides", vec![LinkItem::new("Installation", "/guides/installation/")]),
//!     SidebarGroup::autogenerate("Reference", "reference"),
//! ]);
//!
//! let resolution = resolve(&spec, &index, &BasePath::new("/docs"));
//! assert!(!resolution.has_warnings());
//! assert_eq!(resolution.tree.groups[1].items[0].href, "/docs/reference/api/");
//! ```

mod base;
mod content;
mod resolve;
mod sidebar;
mod tree;

pub use base::{BasePath, is_external};
pub use content::{ContentEntry, ContentIndex};
pub use resolve::{NavigationResolutionError, Resolution, UnresolvedLink, resolve};
pub use sidebar::{AutogenerateDirective, GroupContent, LinkItem, SidebarGroup, SidebarSpec};
pub use tree::{NavGroup, NavLink, NavigationTree};
