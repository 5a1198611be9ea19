//! TOML Configuration File Support
//!
//! Centralized configuration loading for the portfolio, from a TOML file at
//! `~/.config/portfolio/portfolio.toml`.
//!
//! # Configuration Priority
//!
//! Values are loaded with the following priority (highest first):
//! 1. CLI arguments ([`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [navigation]
//! cooldown_ms = 600
//! transition_ms = 400
//!
//! [theme]
//! transition_ms = 400
//! prefers_dark = true
//!
//! [gestures]
//! wheel_threshold = 30.0
//! min_swipe_distance = 50.0
//!
//! [contact]
//! service_id = "service_abc"
//! template_id = "template_owner"
//! auto_reply_template_id = "template_reply"
//! public_key = "pk_123"
//! notice_secs = 5
//!
//! [profile]
//! name = "Gustavo"
//! role = "Software Engineer"
//!
//! [storage]
//! path = "/home/me/.local/share/portfolio/state.json"
//!
//! [[projects]]
//! id = 1
//! title = "Portfolio 2025"
//! description = "Modern portfolio website"
//! categories = ["Web Development"]
//! featured = true
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::ContactConfig;
use crate::gestures::GestureConfig;
use crate::navigation::NavigationConfig;
use crate::notices::DEFAULT_NOTICE_TTL;
use crate::projects::{default_catalog, Project};
use crate::theme::DEFAULT_THEME_TRANSITION;

mod profile;

pub use profile::{Profile, Stat};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// Environment Variables
// =============================================================================

/// Navigation cooldown override (milliseconds)
pub const ENV_COOLDOWN_MS: &str = "PORTFOLIO_COOLDOWN_MS";
/// Page transition override (milliseconds)
pub const ENV_TRANSITION_MS: &str = "PORTFOLIO_TRANSITION_MS";
/// EmailJS service id
pub const ENV_SERVICE_ID: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";
/// EmailJS owner-notification template
pub const ENV_TEMPLATE_ID: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";
/// EmailJS auto-reply template
pub const ENV_AUTO_REPLY_TEMPLATE_ID: &str = "PORTFOLIO_EMAILJS_AUTO_REPLY_TEMPLATE_ID";
/// EmailJS public key
pub const ENV_PUBLIC_KEY: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";
/// State file location
pub const ENV_STATE_PATH: &str = "PORTFOLIO_STATE_PATH";

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Navigation section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationToml {
    /// Minimum time between accepted navigations (milliseconds)
    pub cooldown_ms: Option<u64>,

    /// Page transition length (milliseconds)
    pub transition_ms: Option<u64>,
}

/// Theme section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeToml {
    /// Theme cross-fade length (milliseconds)
    pub transition_ms: Option<u64>,

    /// Force the "prefers dark" signal instead of reading `COLORFGBG`
    pub prefers_dark: Option<bool>,
}

/// Gesture section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GesturesToml {
    /// Minimum `|deltaY|` for a wheel event
    pub wheel_threshold: Option<f32>,

    /// Minimum swipe travel in pixels
    pub min_swipe_distance: Option<f32>,
}

/// Contact section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactToml {
    /// Email API origin
    pub endpoint: Option<String>,

    /// EmailJS service id
    pub service_id: Option<String>,

    /// Owner-notification template
    pub template_id: Option<String>,

    /// Auto-reply template
    pub auto_reply_template_id: Option<String>,

    /// EmailJS public key
    pub public_key: Option<String>,

    /// Notice lifetime (seconds)
    pub notice_secs: Option<u64>,

    /// Per-request timeout (seconds)
    pub timeout_secs: Option<u64>,
}

/// Profile section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileToml {
    /// Display name
    pub name: Option<String>,
    /// Job title
    pub role: Option<String>,
    /// Short introduction
    pub tagline: Option<String>,
    /// Public email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// GitHub profile URL
    pub github: Option<String>,
    /// LinkedIn profile URL
    pub linkedin: Option<String>,
    /// Technologies shown on the hero page
    pub skills: Option<Vec<String>>,
    /// Count-up figures on the hero page
    pub stats: Option<Vec<Stat>>,
}

/// Storage section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageToml {
    /// State file location
    pub path: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioToml {
    /// Navigation configuration section
    pub navigation: NavigationToml,

    /// Theme configuration section
    pub theme: ThemeToml,

    /// Gesture configuration section
    pub gestures: GesturesToml,

    /// Contact configuration section
    pub contact: ContactToml,

    /// Profile configuration section
    pub profile: ProfileToml,

    /// Storage configuration section
    pub storage: StorageToml,

    /// Project catalog (replaces the built-in one when non-empty)
    pub projects: Vec<Project>,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Centralized configuration for the portfolio
///
/// Use [`load_config`] to load it with proper priority handling.
#[derive(Clone, Debug)]
pub struct PortfolioConfig {
    /// Navigation timing
    pub navigation: NavigationConfig,

    /// Theme cross-fade length
    pub theme_transition: Duration,

    /// Forced "prefers dark" signal (`None` = ask the terminal)
    pub prefers_dark: Option<bool>,

    /// Gesture thresholds
    pub gestures: GestureConfig,

    /// Contact delivery
    pub contact: ContactConfig,

    /// Notice lifetime
    pub notice_ttl: Duration,

    /// Who the portfolio is about
    pub profile: Profile,

    /// State file location (`None` = XDG data dir)
    pub storage_path: Option<PathBuf>,

    /// Project catalog
    pub projects: Vec<Project>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            theme_transition: DEFAULT_THEME_TRANSITION,
            prefers_dark: None,
            gestures: GestureConfig::default(),
            contact: ContactConfig::default(),
            notice_ttl: DEFAULT_NOTICE_TTL,
            profile: Profile::default(),
            storage_path: None,
            projects: default_catalog(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl PortfolioConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Reject values that would make the controllers misbehave
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::ValidationError(msg.to_string()));

        if self.navigation.cooldown.is_zero() {
            return invalid("navigation.cooldown_ms must be greater than 0");
        }
        if self.navigation.transition_duration.is_zero() {
            return invalid("navigation.transition_ms must be greater than 0");
        }
        if self.theme_transition.is_zero() {
            return invalid("theme.transition_ms must be greater than 0");
        }
        if !(self.gestures.wheel_threshold.is_finite() && self.gestures.wheel_threshold > 0.0) {
            return invalid("gestures.wheel_threshold must be positive");
        }
        if !(self.gestures.min_swipe_distance.is_finite() && self.gestures.min_swipe_distance > 0.0)
        {
            return invalid("gestures.min_swipe_distance must be positive");
        }
        if self.notice_ttl.is_zero() {
            return invalid("contact.notice_secs must be greater than 0");
        }
        if self.contact.timeout.is_zero() {
            return invalid("contact.timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/portfolio/portfolio.toml` or
/// `~/.config/portfolio/portfolio.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("portfolio").join("portfolio.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the merged result fails validation. A missing config file is not an error.
pub fn load_config() -> Result<PortfolioConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<PortfolioConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration, reading environment variables through `env`
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_config_with_env(
    path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PortfolioConfig, ConfigError> {
    let mut config = PortfolioConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: PortfolioToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut PortfolioConfig, toml: PortfolioToml) {
    // Navigation
    if let Some(ms) = toml.navigation.cooldown_ms {
        config.navigation.cooldown = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.navigation.transition_ms {
        config.navigation.transition_duration = Duration::from_millis(ms);
    }

    // Theme
    if let Some(ms) = toml.theme.transition_ms {
        config.theme_transition = Duration::from_millis(ms);
    }
    if toml.theme.prefers_dark.is_some() {
        config.prefers_dark = toml.theme.prefers_dark;
    }

    // Gestures
    if let Some(threshold) = toml.gestures.wheel_threshold {
        config.gestures.wheel_threshold = threshold;
    }
    if let Some(distance) = toml.gestures.min_swipe_distance {
        config.gestures.min_swipe_distance = distance;
    }

    // Contact
    let contact = toml.contact;
    if let Some(endpoint) = contact.endpoint {
        config.contact.endpoint = endpoint;
    }
    if contact.service_id.is_some() {
        config.contact.service_id = contact.service_id;
    }
    if contact.template_id.is_some() {
        config.contact.template_id = contact.template_id;
    }
    if contact.auto_reply_template_id.is_some() {
        config.contact.auto_reply_template_id = contact.auto_reply_template_id;
    }
    if contact.public_key.is_some() {
        config.contact.public_key = contact.public_key;
    }
    if let Some(secs) = contact.notice_secs {
        config.notice_ttl = Duration::from_secs(secs);
    }
    if let Some(secs) = contact.timeout_secs {
        config.contact.timeout = Duration::from_secs(secs);
    }

    // Profile
    config.profile.apply_toml(toml.profile);

    // Storage
    if let Some(path) = toml.storage.path {
        config.storage_path = Some(PathBuf::from(path));
    }

    // Projects
    if !toml.projects.is_empty() {
        config.projects = toml.projects;
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut PortfolioConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(ms) = env(ENV_COOLDOWN_MS).and_then(|v| v.parse::<u64>().ok()) {
        config.navigation.cooldown = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = env(ENV_TRANSITION_MS).and_then(|v| v.parse::<u64>().ok()) {
        config.navigation.transition_duration = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }

    let contact_vars = [
        (ENV_SERVICE_ID, &mut config.contact.service_id),
        (ENV_TEMPLATE_ID, &mut config.contact.template_id),
        (ENV_AUTO_REPLY_TEMPLATE_ID, &mut config.contact.auto_reply_template_id),
        (ENV_PUBLIC_KEY, &mut config.contact.public_key),
    ];
    let mut from_env = false;
    for (key, slot) in contact_vars {
        if let Some(value) = env(key) {
            *slot = Some(value);
            from_env = true;
        }
    }

    if let Some(path) = env(ENV_STATE_PATH) {
        config.storage_path = Some(PathBuf::from(path));
        from_env = true;
    }

    if from_env {
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// State file override
    pub storage_path: Option<PathBuf>,

    /// "Prefers dark" override
    pub prefers_dark: Option<bool>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set state file override
    #[must_use]
    pub fn with_storage_path(mut self, path: PathBuf) -> Self {
        self.storage_path = Some(path);
        self
    }

    /// Set "prefers dark" override
    #[must_use]
    pub fn with_prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = Some(prefers_dark);
        self
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut PortfolioConfig) {
        if self.storage_path.is_some() || self.prefers_dark.is_some() {
            config.source = ConfigSource::Cli;
        }
        if let Some(ref path) = self.storage_path {
            config.storage_path = Some(path.clone());
        }
        if self.prefers_dark.is_some() {
            config.prefers_dark = self.prefers_dark;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn load(content: &str) -> Result<PortfolioConfig, ConfigError> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        load_config_with_env(Some(file.path().to_path_buf()), no_env)
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();

        assert_eq!(config.navigation.cooldown, Duration::from_millis(600));
        assert_eq!(config.navigation.transition_duration, Duration::from_millis(400));
        assert_eq!(config.theme_transition, Duration::from_millis(400));
        assert_eq!(config.gestures.wheel_threshold, 30.0);
        assert_eq!(config.gestures.min_swipe_distance, 50.0);
        assert_eq!(config.notice_ttl, Duration::from_secs(5));
        assert_eq!(config.projects.len(), 4);
        assert!(!config.contact.is_configured());
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.to_string_lossy().contains("portfolio"));
            assert!(p.to_string_lossy().ends_with("portfolio.toml"));
        }
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let config = load(
            r#"
[navigation]
cooldown_ms = 800
transition_ms = 500

[theme]
transition_ms = 250
prefers_dark = false

[gestures]
wheel_threshold = 40.0
min_swipe_distance = 80.0

[contact]
endpoint = "http://localhost:9000"
service_id = "svc"
template_id = "tpl"
auto_reply_template_id = "reply"
public_key = "pk"
notice_secs = 8
timeout_secs = 3

[profile]
name = "Ada"
skills = ["Rust"]

[storage]
path = "/tmp/portfolio-state.json"

[[projects]]
id = 7
title = "Compiler"
description = "A tiny compiler"
categories = ["Languages"]
featured = true
"#,
        )
        .unwrap();

        assert_eq!(config.navigation.cooldown, Duration::from_millis(800));
        assert_eq!(config.navigation.transition_duration, Duration::from_millis(500));
        assert_eq!(config.theme_transition, Duration::from_millis(250));
        assert_eq!(config.prefers_dark, Some(false));
        assert_eq!(config.gestures.wheel_threshold, 40.0);
        assert_eq!(config.gestures.min_swipe_distance, 80.0);
        assert_eq!(config.contact.endpoint, "http://localhost:9000");
        assert!(config.contact.is_configured());
        assert_eq!(config.contact.timeout, Duration::from_secs(3));
        assert_eq!(config.notice_ttl, Duration::from_secs(8));
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.skills, vec!["Rust".to_string()]);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/portfolio-state.json")));
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].title, "Compiler");
        assert!(config.projects[0].technologies.is_empty());
        assert_eq!(config.source(), ConfigSource::File);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = load(
            r#"
[navigation]
cooldown_ms = 750
"#,
        )
        .unwrap();

        assert_eq!(config.navigation.cooldown, Duration::from_millis(750));
        assert_eq!(config.navigation.transition_duration, Duration::from_millis(400));
        assert_eq!(config.profile, Profile::default());
        assert_eq!(config.projects.len(), 4);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = load("").unwrap();
        assert_eq!(config.navigation, NavigationConfig::default());
        assert_eq!(config.source(), ConfigSource::File);
    }

    // =========================================================================
    // Missing File Handling Tests
    // =========================================================================

    #[test]
    fn test_missing_file_graceful() {
        let path = PathBuf::from("/nonexistent/path/portfolio.toml");
        let config = load_config_with_env(Some(path), no_env).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = load_config_with_env(None, no_env).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
    }

    // =========================================================================
    // Malformed / Invalid TOML Tests
    // =========================================================================

    #[test]
    fn test_malformed_toml_error() {
        let result = load(
            r#"
[navigation
cooldown_ms = "not a number"
"#,
        );
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        for content in [
            "[navigation]\ncooldown_ms = 0",
            "[navigation]\ntransition_ms = 0",
            "[theme]\ntransition_ms = 0",
            "[gestures]\nwheel_threshold = 0.0",
            "[gestures]\nmin_swipe_distance = -5.0",
            "[contact]\nnotice_secs = 0",
        ] {
            assert!(
                matches!(load(content), Err(ConfigError::ValidationError(_))),
                "accepted: {content}"
            );
        }
    }

    // =========================================================================
    // Priority Ordering Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[navigation]\ncooldown_ms = 900\n[contact]\nservice_id = \"file\"")
            .unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_COOLDOWN_MS, "700"),
            (ENV_SERVICE_ID, "env"),
            (ENV_STATE_PATH, "/tmp/env-state.json"),
        ]
        .into_iter()
        .collect();

        let config = load_config_with_env(Some(file.path().to_path_buf()), |k| {
            env.get(k).map(|v| (*v).to_string())
        })
        .unwrap();

        assert_eq!(config.navigation.cooldown, Duration::from_millis(700));
        assert_eq!(config.contact.service_id.as_deref(), Some("env"));
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/env-state.json")));
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_unparsable_env_is_ignored() {
        let config = load_config_with_env(None, |k| {
            (k == ENV_COOLDOWN_MS).then(|| "soon".to_string())
        })
        .unwrap();
        assert_eq!(config.navigation.cooldown, Duration::from_millis(600));
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = PortfolioConfig::default();
        config.storage_path = Some(PathBuf::from("/env/state.json"));
        config.set_source(ConfigSource::Env);

        ConfigOverrides::new()
            .with_storage_path(PathBuf::from("/cli/state.json"))
            .with_prefers_dark(false)
            .apply(&mut config);

        assert_eq!(config.storage_path, Some(PathBuf::from("/cli/state.json")));
        assert_eq!(config.prefers_dark, Some(false));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = PortfolioConfig::default();
        ConfigOverrides::new().apply(&mut config);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    // =========================================================================
    // ConfigSource / Error Tests
    // =========================================================================

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Cli), "CLI");
        assert_eq!(format!("{}", ConfigSource::Env), "environment");
        assert_eq!(format!("{}", ConfigSource::File), "config file");
        assert_eq!(format!("{}", ConfigSource::Default), "default");
    }

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::ReadError {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{}", read_err);
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("Failed to read"));
    }
}
