//! Variable references in the configured API base URL.
//!
//! `wpfront.toml` may point at the WordPress host through the environment,
//! e.g. `base_url = "https://${WP_HOST}/wp-json/wp/v2"`. Two forms are
//! recognized:
//! - `${VAR}`: value of VAR, an error if unset
//! - `${VAR:-default}`: value of VAR, or `default` if unset
//!
//! A URL without `${` is returned as written, so a literal `$` in a path or
//! query string is never treated as a reference.

use crate::ConfigError;

/// Config key reported in expansion errors.
const BASE_URL_FIELD: &str = "api.base_url";

/// Expand variable references in a base URL, resolving names with `lookup`.
pub(crate) fn expand_base_url(
    url: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    if !url.contains("${") {
        return Ok(url.to_owned());
    }

    shellexpand::env_with_context(url, |name: &str| {
        lookup(name).map(Some).ok_or_else(|| name.to_owned())
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|err| ConfigError::EnvVar {
        field: BASE_URL_FIELD.to_owned(),
        message: format!("${{{}}} not set", err.cause),
    })
}
