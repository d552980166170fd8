//! `${VAR}` and `${VAR:-default}` references in `docsite.toml` strings.
//!
//! Only the braced form is recognised, so a literal `$` in a URL
//! (`https://example.com/$path`) passes through untouched.

use std::env::VarError;

use crate::ConfigError;

/// Expand references in `value` in place.
///
/// `field` is the config path reported on failure, indexed for list entries
/// (`theme.social[1].href`).
pub(crate) fn expand_field(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |var| {
        std::env::var(var).map(Some)
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: match e.cause {
            VarError::NotPresent => format!("${{{}}} not set", e.var_name),
            VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", e.var_name),
        },
    })?
    .into_owned();

    *value = expanded;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand(input: &str, field: &str) -> Result<String, ConfigError> {
        let mut value = input.to_owned();
        expand_field(&mut value, field)?;
        Ok(value)
    }

    #[test]
    fn test_expand_base_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_EXPAND_BASE", "/ignition-tfpl");
        }
        assert_eq!(
            expand("${DOCSITE_EXPAND_BASE}", "base").unwrap(),
            "/ignition-tfpl"
        );
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_BASE");
        }
    }

    #[test]
    fn test_expand_default_for_site() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_UNSET_SITE");
        }
        assert_eq!(
            expand(
                "${DOCSITE_EXPAND_UNSET_SITE:-https://apollogeddon.github.io}",
                "site"
            )
            .unwrap(),
            "https://apollogeddon.github.io"
        );
    }

    #[test]
    fn test_expand_inside_social_href() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_EXPAND_REPO", "ignition-tfpl");
        }
        assert_eq!(
            expand(
                "https://github.com/apollogeddon/${DOCSITE_EXPAND_REPO}",
                "theme.social[0].href"
            )
            .unwrap(),
            "https://github.com/apollogeddon/ignition-tfpl"
        );
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_REPO");
        }
    }

    #[test]
    fn test_missing_var_reports_indexed_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_EXPAND_MISSING");
        }
        let err = expand("${DOCSITE_EXPAND_MISSING}", "theme.social[2].href").unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "theme.social[2].href");
                assert_eq!(message, "${DOCSITE_EXPAND_MISSING} not set");
            }
            other => panic!("expected EnvVar, got {other:?}"),
        }
    }

    #[test]
    fn test_value_untouched_without_braces() {
        assert_eq!(
            expand("https://example.com/$path", "site").unwrap(),
            "https://example.com/$path"
        );
    }
}
