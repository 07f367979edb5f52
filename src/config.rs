//! TOML-based service configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Top-level service configuration parsed from TOML.
///
/// All fields have defaults matching the public carbon-intensity API and
/// a 30-minute slot grid. Load from TOML with
/// [`AppConfig::from_toml_file`] or use [`AppConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server parameters.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream forecast API parameters.
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Slot grid and duration bounds.
    #[serde(default)]
    pub slots: SlotsConfig,
}

/// HTTP server parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port the API binds to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Upstream forecast API parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL of the carbon-intensity API.
    pub base_url: String,
    /// Per-request timeout in seconds (must be > 0).
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.carbonintensity.org.uk".to_string(),
            timeout_secs: 3,
        }
    }
}

/// Slot grid and duration bounds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlotsConfig {
    /// Width of one forecast period in minutes (must be > 0).
    pub slot_width_minutes: u32,
    /// Smallest accepted task duration in minutes (must be > 0).
    pub min_duration_minutes: u32,
    /// Largest accepted task duration in minutes.
    pub max_duration_minutes: u32,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            slot_width_minutes: 30,
            min_duration_minutes: 30,
            max_duration_minutes: 1440,
        }
    }
}

/// A single failed configuration constraint.
#[derive(Debug, Clone, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"slots.slot_width_minutes"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: path.display().to_string(),
            message: format!("failed to read config file: {e}"),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Checks cross-field constraints, returning every violation.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.slots.slot_width_minutes == 0 {
            errors.push(ConfigError {
                field: "slots.slot_width_minutes".to_string(),
                message: "must be > 0".to_string(),
            });
        }
        if self.slots.min_duration_minutes == 0 {
            errors.push(ConfigError {
                field: "slots.min_duration_minutes".to_string(),
                message: "must be > 0".to_string(),
            });
        }
        if self.slots.min_duration_minutes > self.slots.max_duration_minutes {
            errors.push(ConfigError {
                field: "slots.min_duration_minutes".to_string(),
                message: "must be <= slots.max_duration_minutes".to_string(),
            });
        }
        if self.upstream.base_url.is_empty() {
            errors.push(ConfigError {
                field: "upstream.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.upstream.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "upstream.timeout_secs".to_string(),
                message: "must be > 0".to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.upstream.base_url, "https://api.carbonintensity.org.uk");
        assert_eq!(cfg.upstream.timeout_secs, 3);
        assert_eq!(cfg.slots.slot_width_minutes, 30);
        assert_eq!(cfg.slots.min_duration_minutes, 30);
        assert_eq!(cfg.slots.max_duration_minutes, 1440);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [server]
            port = 8080

            [slots]
            max_duration_minutes = 720
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.slots.max_duration_minutes, 720);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.slots.slot_width_minutes, 30);
        assert_eq!(cfg.upstream.timeout_secs, 3);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [slots]
            slot_width = 30
            "#,
        )
        .unwrap_err();
        assert_eq!(err.field, "toml");
    }

    #[test]
    fn validate_catches_zero_slot_width() {
        let cfg = AppConfig::from_toml_str("[slots]\nslot_width_minutes = 0\n").unwrap();
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "slots.slot_width_minutes")
        );
    }

    #[test]
    fn validate_catches_inverted_duration_bounds() {
        let cfg = AppConfig::from_toml_str(
            "[slots]\nmin_duration_minutes = 120\nmax_duration_minutes = 60\n",
        )
        .unwrap();
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.message.contains("max_duration_minutes"))
        );
    }

    #[test]
    fn validate_catches_bad_upstream_settings() {
        let cfg =
            AppConfig::from_toml_str("[upstream]\nbase_url = \"\"\ntimeout_secs = 0\n").unwrap();
        let errors = cfg.validate();
        assert_eq!(errors.len(), 2);
    }
}
