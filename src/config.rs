//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Options controlling how a diagram is resolved into states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// New identifiers are assigned strictly above this value
    #[serde(default)]
    pub starting_id: u64,

    /// How plain state names are matched against existing states
    #[serde(default)]
    pub identity: NameIdentity,

    /// What to do when a content line names an unknown state
    #[serde(default)]
    pub on_unresolved: OnUnresolved,

    /// Inserted between successive content annotations of one state
    #[serde(default = "default_content_separator")]
    pub content_separator: String,
}

/// Plain-name identity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NameIdentity {
    /// A name denotes the same state everywhere in the diagram
    #[default]
    Global,
    /// A name is looked up in the current scope, then in enclosing scopes
    Scoped,
}

/// Policy for content annotations that reference an undeclared state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OnUnresolved {
    /// Stop and return the error
    #[default]
    Abort,
    /// Record a diagnostic and continue with the next line
    Skip,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_content_separator() -> String {
    "\n".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            starting_id: 0,
            identity: NameIdentity::default(),
            on_unresolved: OnUnresolved::default(),
            content_separator: default_content_separator(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_starting_id(mut self, starting_id: u64) -> Self {
        self.starting_id = starting_id;
        self
    }

    pub fn with_identity(mut self, identity: NameIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_on_unresolved(mut self, policy: OnUnresolved) -> Self {
        self.on_unresolved = policy;
        self
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents).map_err(|e| Error::ConfigParse {
            file: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./stategraph.toml
    /// 2. ~/.puml-stategraph/config.toml
    /// 3. /etc/puml-stategraph/config.toml
    pub fn load() -> Result<Self> {
        let mut paths = vec![PathBuf::from("stategraph.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".puml-stategraph").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/puml-stategraph/config.toml"));

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.starting_id, 0);
        assert_eq!(config.analyzer.identity, NameIdentity::Global);
        assert_eq!(config.analyzer.on_unresolved, OnUnresolved::Abort);
        assert_eq!(config.analyzer.content_separator, "\n");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[analyzer]
starting_id = 100
identity = "scoped"
on_unresolved = "skip"

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.analyzer.starting_id, 100);
        assert_eq!(config.analyzer.identity, NameIdentity::Scoped);
        assert_eq!(config.analyzer.on_unresolved, OnUnresolved::Skip);
        assert_eq!(config.analyzer.content_separator, "\n");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[analyzer]\ncontent_separator = \" | \"\n").unwrap();
        assert_eq!(config.analyzer.content_separator, " | ");
        assert_eq!(config.analyzer.identity, NameIdentity::Global);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/stategraph.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
