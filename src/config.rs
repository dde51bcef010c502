use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
}

/// Options for the JSON request/response service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Pretty-print JSON responses (one response still per line group)
    pub pretty_responses: bool,
    /// Default log filter, overridable via RUST_LOG
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            pretty_responses: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            // Logging is not initialized until the config is loaded
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service.log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.service.pretty_responses);
        assert_eq!(config.service.log_filter, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [service]
            pretty_responses = true
            "#,
        )
        .unwrap();
        assert!(config.service.pretty_responses);
        assert_eq!(config.service.log_filter, "info");
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        let mut config = AppConfig::default();
        config.service.log_filter = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
