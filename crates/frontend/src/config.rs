//! Frontend configuration
//!
//! Defaults match the development backend. Any value can be overridden from a
//! file or from `INKWELL_` prefixed environment variables, with `__`
//! separating nested keys (`INKWELL_API__BASE_URL`).

use config::{ConfigError, Environment, Map};
use inkwell_core::AuthConfig;
use inkwell_core::validation::{ValidateConfig, validators};
use inkwell_http::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for talking to the auth service and gating pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    pub api: ApiConfig,

    /// Paths that require the access token cookie
    pub protected_routes: Vec<String>,
}

/// Remote service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            protected_routes: AuthConfig::PROTECTED_ROUTES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FrontendConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a value cannot be parsed,
    /// or the result fails validation
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`FrontendConfig::load`], reading variables from `vars` instead
    /// of the process environment when given
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_secs", defaults.api.timeout_secs)?
            .set_default("protected_routes", defaults.protected_routes)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("INKWELL")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("protected_routes")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl ValidateConfig for FrontendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validators::validate_url(&self.api.base_url, "api.base_url")?;
        validators::validate_range(self.api.timeout_secs, 1, 300, "api.timeout_secs")?;
        for route in &self.protected_routes {
            validators::validate_path(route, "protected_routes")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout(), Duration::from_secs(5));
        assert_eq!(config.protected_routes, vec!["/dashboard".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
protected_routes = ["/dashboard", "/drafts"]

[api]
base_url = "https://api.example.com"
timeout_secs = 10
"#
        )
        .unwrap();

        let config = FrontendConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.protected_routes.len(), 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 7").unwrap();

        let config = FrontendConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 7);
    }

    fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        let config = FrontendConfig::load_with_env(
            None,
            vars(&[
                ("INKWELL_API__TIMEOUT_SECS", "42"),
                ("INKWELL_API__BASE_URL", "https://api.example.com"),
                ("INKWELL_PROTECTED_ROUTES", "/dashboard,/drafts"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api.timeout_secs, 42);
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(
            config.protected_routes,
            vec!["/dashboard".to_string(), "/drafts".to_string()]
        );
    }

    #[test]
    fn test_env_wins_over_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 7").unwrap();

        let config = FrontendConfig::load_with_env(
            Some(file.path()),
            vars(&[("INKWELL_API__TIMEOUT_SECS", "9")]),
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 9);
    }

    #[test]
    fn test_unprefixed_env_ignored() {
        let config =
            FrontendConfig::load_with_env(None, vars(&[("API__TIMEOUT_SECS", "42")])).unwrap();
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = FrontendConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = FrontendConfig::default();
        config.protected_routes = vec!["dashboard".to_string()];
        assert!(config.validate().is_err());

        let mut config = FrontendConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
