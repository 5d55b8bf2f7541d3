//! Configuration management for the Inkwell daemon

use crate::Result;
use config::{Environment, Map};
use inkwell_core::validation::{ValidateConfig, validators};
use inkwell_frontend::FrontendConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main daemon configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Auth service and guarded routes
    pub frontend: FrontendConfig,

    /// Log output
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the page server
    pub bind_addr: SocketAddr,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON lines
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "inkwell=info,tower_http=info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and `INKWELL_` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed, or
    /// if the merged settings fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`Settings::load`], reading variables from `vars` instead of
    /// the process environment when given
    pub(crate) fn load_with_env(
        path: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("INKWELL")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("frontend.protected_routes")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

impl ValidateConfig for Settings {
    fn validate(&self) -> std::result::Result<(), config::ConfigError> {
        validators::validate_not_empty(&self.logging.level, "logging.level")?;
        self.frontend.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind_addr.port(), 3000);
        assert_eq!(settings.frontend.api.base_url, "http://localhost:8000");
        assert!(!settings.logging.json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = Settings::load_with_env(None, Some(Map::new())).unwrap();
        assert_eq!(settings.frontend.protected_routes, vec!["/dashboard".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
bind_addr = "0.0.0.0:8080"

[frontend]
protected_routes = ["/dashboard", "/drafts"]

[frontend.api]
base_url = "https://api.example.com"
timeout_secs = 10

[logging]
level = "debug"
json = true
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.server.bind_addr.port(), 8080);
        assert_eq!(settings.frontend.api.base_url, "https://api.example.com");
        assert_eq!(settings.frontend.protected_routes.len(), 2);
        assert_eq!(settings.logging.level, "debug");
        assert!(settings.logging.json);
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        let vars: Map<String, String> = [
            ("INKWELL_SERVER__BIND_ADDR", "0.0.0.0:9000"),
            ("INKWELL_FRONTEND__API__TIMEOUT_SECS", "42"),
            ("INKWELL_FRONTEND__PROTECTED_ROUTES", "/dashboard,/drafts"),
            ("INKWELL_LOGGING__JSON", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::load_with_env(None, Some(vars)).unwrap();
        assert_eq!(settings.server.bind_addr.port(), 9000);
        assert_eq!(settings.frontend.api.timeout_secs, 42);
        assert_eq!(settings.frontend.protected_routes.len(), 2);
        assert!(settings.logging.json);
    }

    #[test]
    fn test_invalid_file_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[frontend]\nprotected_routes = [\"dashboard\"]").unwrap();

        assert!(Settings::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(Settings::load(Some(Path::new("/nonexistent/inkwell.toml"))).is_err());
    }
}
