//! Configuration management for wpfront.
//!
//! Parses `wpfront.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The only setting that matters to the content client is the WordPress REST
//! API base URL. It is resolved in this order:
//!
//! 1. [`Overrides::base_url`] (applied after loading)
//! 2. `api.base_url` from `wpfront.toml`
//! 3. The `WORDPRESS_API_URL` environment variable
//! 4. [`DEFAULT_API_URL`]
//!
//! ## Environment Variable Expansion
//!
//! `api.base_url` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base URL used when neither a config file nor the environment provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/wp-json/wp/v2";

/// Environment variable consulted for the API base URL.
pub const API_URL_ENV: &str = "WORDPRESS_API_URL";

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wpfront.toml";

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Override the API base URL.
    pub base_url: Option<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API section as written in TOML.
    #[serde(rename = "api")]
    api_raw: ApiConfigRaw,

    /// Resolved API configuration (set after loading).
    #[serde(skip)]
    pub api: ApiConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw API configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiConfigRaw {
    base_url: Option<String>,
}

/// WordPress REST API connection settings.
///
/// This is the value injected into the content client at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// REST API root, e.g. `https://example.com/wp-json/wp/v2`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Create API settings for an explicit base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `WORDPRESS_API_URL`, falling back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the base URL through an arbitrary variable lookup.
    ///
    /// An empty value counts as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_ENV) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Validate that the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the URL is empty or not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "api.base_url")?;
        require_http_url(&self.base_url, "api.base_url")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`api.base_url`").
        field: String,
        /// Error message (e.g., "${`WP_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `wpfront.toml` in current directory and parents.
    /// When no file is found, the API settings come from the environment.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resolved base URL is invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self {
                api: ApiConfig::from_env(),
                ..Self::default()
            }
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.resolve(|name| std::env::var(name).ok());
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.api_raw.base_url {
            self.api_raw.base_url = Some(expand::expand_base_url(url, |name| {
                std::env::var(name).ok()
            })?);
        }
        Ok(())
    }

    /// Resolve raw TOML values, falling back to the environment for anything unset.
    fn resolve(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.api = match &self.api_raw.base_url {
            Some(url) => ApiConfig::new(url.clone()),
            None => ApiConfig::from_lookup(lookup),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_api_config() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "http://localhost:8080/wp-json/wp/v2");
        assert!(api.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_uses_env_value() {
        let api = ApiConfig::from_lookup(|name| {
            (name == API_URL_ENV).then(|| "https://cms.example.com/wp-json/wp/v2".to_owned())
        });
        assert_eq!(api.base_url, "https://cms.example.com/wp-json/wp/v2");
    }

    #[test]
    fn test_from_lookup_empty_value_falls_back() {
        let api = ApiConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(api, ApiConfig::default());
    }

    #[test]
    fn test_from_lookup_unset_falls_back() {
        assert_eq!(ApiConfig::from_lookup(no_env), ApiConfig::default());
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve(no_env);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_parse_api_config() {
        let toml = r#"
[api]
base_url = "https://cms.example.com/wp-json/wp/v2"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(|_| Some("https://ignored.example.com".to_owned()));
        assert_eq!(config.api.base_url, "https://cms.example.com/wp-json/wp/v2");
    }

    #[test]
    fn test_api_section_without_url_uses_env() {
        let toml = "[api]\n";
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(|_| Some("http://wp.internal/wp-json/wp/v2".to_owned()));
        assert_eq!(config.api.base_url, "http://wp.internal/wp-json/wp/v2");
    }

    #[test]
    fn test_expand_env_vars_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WPFRONT_TEST_CMS_HOST", "cms.test.com");
        }

        let toml = r#"
[api]
base_url = "https://${WPFRONT_TEST_CMS_HOST}/wp-json/wp/v2"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve(no_env);

        assert_eq!(config.api.base_url, "https://cms.test.com/wp-json/wp/v2");

        unsafe {
            std::env::remove_var("WPFRONT_TEST_CMS_HOST");
        }
    }

    #[test]
    fn test_apply_overrides_base_url() {
        let mut config = Config::default();
        config.apply_overrides(&Overrides {
            base_url: Some("https://override.example.com/wp-json/wp/v2".to_owned()),
        });
        assert_eq!(
            config.api.base_url,
            "https://override.example.com/wp-json/wp/v2"
        );
    }

    #[test]
    fn test_apply_overrides_empty() {
        let mut config = Config::default();
        config.apply_overrides(&Overrides::default());
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_validate_empty_base_url() {
        let err = ApiConfig::new("").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("api.base_url"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_invalid_scheme() {
        let err = ApiConfig::new("ftp://cms.example.com").validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let err = Config::load(Some(Path::new("/nonexistent/wpfront.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://cms.example.com/wp-json/wp/v2\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.api.base_url, "https://cms.example.com/wp-json/wp/v2");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_rejects_invalid_url_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api]\nbase_url = \"cms.example.com\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_overrides_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[api]\nbase_url = \"https://file.example.com\"\n").unwrap();

        let overrides = Overrides {
            base_url: Some("https://cli.example.com".to_owned()),
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();
        assert_eq!(config.api.base_url, "https://cli.example.com");
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site").join("src");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }
}
