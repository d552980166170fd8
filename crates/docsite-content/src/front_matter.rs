//! YAML front matter parsing.
//!
//! Pages may start with a `---` fenced YAML block:
//!
//! ```text
//! ---
//! title: Resources
//! sidebar:
//!   order: 2
//!   hidden: false
//! ---
//! ```

use serde::Deserialize;

/// Fields read from a page's front matter.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub sidebar: SidebarFields,
}

/// Sidebar-specific front matter.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct SidebarFields {
    pub order: Option<i64>,
    pub hidden: bool,
}

/// Split content into its front matter block (if any) and the body.
pub(crate) fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    // Unterminated fence: treat the whole file as body.
    (None, content)
}

/// Parse a front matter block.
///
/// An empty block yields the default.
pub(crate) fn parse_front_matter(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(trimmed)
}
