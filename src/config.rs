//! Configuration management for the `TravelEase` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelEaseError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration structure for the `TravelEase` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelEaseConfig {
    /// Narrative backend configuration
    #[serde(default)]
    pub narrative: NarrativeConfig,
    /// Pricing multiplier overrides
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default trip planning settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Narrative backend (Gemini) configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// API key; falls back to the GEMINI_API_KEY environment variable
    pub api_key: Option<String>,
    /// Model used for itineraries and weather outlooks
    #[serde(default = "default_narrative_model")]
    pub model: String,
    /// Base URL of the generative language API
    #[serde(default = "default_narrative_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_narrative_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for failed requests
    #[serde(default = "default_narrative_max_retries")]
    pub max_retries: u32,
}

/// Pricing multiplier overrides, keyed by cabin or tier name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flight cabin multiplier overrides ("business" = 1.8, ...)
    #[serde(default)]
    pub flight_multipliers: HashMap<String, f64>,
    /// Hotel tier multiplier overrides ("5-star" = 1.5, ...)
    #[serde(default)]
    pub hotel_multipliers: HashMap<String, f64>,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default trip planning settings, used when the CLI omits an argument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default trip budget in USD
    #[serde(default = "default_budget")]
    pub budget_usd: f64,
    /// Default trip duration in days
    #[serde(default = "default_duration")]
    pub duration_days: u32,
    /// Default traveler count
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    /// Largest traveler count the planner accepts
    #[serde(default = "default_max_travelers")]
    pub max_travelers: u32,
}

// Default value functions
fn default_narrative_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_narrative_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_narrative_timeout() -> u32 {
    30
}

fn default_narrative_max_retries() -> u32 {
    1
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_budget() -> f64 {
    2500.0
}

fn default_duration() -> u32 {
    7
}

fn default_travelers() -> u32 {
    2
}

fn default_max_travelers() -> u32 {
    10
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_narrative_model(),
            base_url: default_narrative_base_url(),
            timeout_seconds: default_narrative_timeout(),
            max_retries: default_narrative_max_retries(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            budget_usd: default_budget(),
            duration_days: default_duration(),
            travelers: default_travelers(),
            max_travelers: default_max_travelers(),
        }
    }
}

impl TravelEaseConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRAVELEASE_ prefix;
        // nested keys use "__" (TRAVELEASE_LOGGING__LEVEL -> logging.level)
        builder = builder.add_source(
            Environment::with_prefix("TRAVELEASE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelEaseConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // The original deployment keys the narrative backend off GEMINI_API_KEY
        if config.narrative.api_key.is_none() {
            config.narrative.api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("GOOGLE_API_KEY"))
                .ok()
                .filter(|key| !key.is_empty());
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelease").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.narrative.model.is_empty() {
            self.narrative.model = default_narrative_model();
        }
        if self.narrative.base_url.is_empty() {
            self.narrative.base_url = default_narrative_base_url();
        }
        if self.narrative.timeout_seconds == 0 {
            self.narrative.timeout_seconds = default_narrative_timeout();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.budget_usd <= 0.0 {
            self.defaults.budget_usd = default_budget();
        }
        if self.defaults.duration_days == 0 {
            self.defaults.duration_days = default_duration();
        }
        if self.defaults.travelers == 0 {
            self.defaults.travelers = default_travelers();
        }
        if self.defaults.max_travelers == 0 {
            self.defaults.max_travelers = default_max_travelers();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        // The catalog and cost estimator work without a key; only the
        // narrative commands need one
        if let Some(api_key) = &self.narrative.api_key {
            if api_key.is_empty() {
                return Err(TravelEaseError::config(
                    "Narrative API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TravelEaseError::config(
                    "Narrative API key appears to be invalid (too short). Please check your API key."
                ).into());
            }

            if api_key.len() > 100 {
                return Err(TravelEaseError::config(
                    "Narrative API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.narrative.timeout_seconds > 300 {
            return Err(
                TravelEaseError::config("Narrative timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.narrative.max_retries > 10 {
            return Err(TravelEaseError::config("Narrative max retries cannot exceed 10").into());
        }

        if !self.defaults.budget_usd.is_finite() {
            return Err(TravelEaseError::config("Default budget must be a number").into());
        }

        if self.defaults.max_travelers > 100 {
            return Err(TravelEaseError::config("Maximum travelers cannot exceed 100").into());
        }

        if self.defaults.travelers > self.defaults.max_travelers {
            return Err(TravelEaseError::config(format!(
                "Default traveler count cannot exceed the maximum of {}",
                self.defaults.max_travelers
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelEaseError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelEaseError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.narrative.base_url.starts_with("http://")
            && !self.narrative.base_url.starts_with("https://")
        {
            return Err(TravelEaseError::config(
                "Narrative base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TravelEaseConfig::default();
        assert_eq!(config.narrative.model, "gemini-2.5-flash");
        assert_eq!(
            config.narrative.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.narrative.timeout_seconds, 30);
        assert_eq!(config.narrative.max_retries, 1);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.budget_usd, 2500.0);
        assert_eq!(config.defaults.duration_days, 7);
        assert_eq!(config.defaults.travelers, 2);
        assert!(config.narrative.api_key.is_none());
        assert!(config.pricing.flight_multipliers.is_empty());
    }

    #[test]
    fn test_default_config_passes_validation() {
        let config = TravelEaseConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let mut config = TravelEaseConfig::default();
        config.narrative.api_key = Some("valid_api_key_123".to_string());
        let result = config.validate_api_keys();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = TravelEaseConfig::default();
        config.narrative.api_key = Some("short".to_string());
        let result = config.validate_api_keys();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelEaseConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelEaseConfig::default();
        config.narrative.timeout_seconds = 500; // Invalid - too high
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_config_validation_travelers_over_maximum() {
        let mut config = TravelEaseConfig::default();
        config.defaults.travelers = 12;
        config.defaults.max_travelers = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = TravelEaseConfig::default();
        config.narrative.model = String::new();
        config.defaults.duration_days = 0;
        config.apply_defaults();
        assert_eq!(config.narrative.model, "gemini-2.5-flash");
        assert_eq!(config.defaults.duration_days, 7);
    }

    #[test]
    fn test_config_path_generation() {
        let path = TravelEaseConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("travelease"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
