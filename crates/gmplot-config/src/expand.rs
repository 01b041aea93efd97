//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without a `${` are returned unchanged, so a bare `$` (as in
/// `https://host/$wiki`) is kept literally. `field` names the config field in
/// error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar)
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.var_name),
    })
}

/// Lookup failure for a variable without a default.
struct UnsetVar;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(
            expand_env("https://example.com", "wiki.url").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_bare_dollar_kept_literally() {
        assert_eq!(
            expand_env("https://host/$GMPLOT_TEST_SURELY_UNSET_VAR/wiki", "wiki.url").unwrap(),
            "https://host/$GMPLOT_TEST_SURELY_UNSET_VAR/wiki"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env("${GMPLOT_TEST_SURELY_UNSET_VAR:-fallback}", "wiki.url").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_unset_without_default_errors() {
        let err = expand_env("${GMPLOT_TEST_SURELY_UNSET_VAR}", "wiki.url").unwrap_err();
        assert!(matches!(&err, ConfigError::EnvVar { field, .. } if field == "wiki.url"));
        assert!(err.to_string().contains("GMPLOT_TEST_SURELY_UNSET_VAR"));
    }
}
