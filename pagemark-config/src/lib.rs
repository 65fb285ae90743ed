//! Shared configuration loader for the pagemark toolchain.
//!
//! `defaults/pagemark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`PagemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pagemark_engine::{CompileOptions, DetectionRules};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pagemark.default.toml");

/// Top-level configuration consumed by pagemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PagemarkConfig {
    pub detect: DetectConfig,
    pub convert: ConvertConfig,
}

/// Classifier-related configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectConfig {
    pub rules: DetectionRulesConfig,
}

/// Mirrors the thresholds exposed by the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionRulesConfig {
    pub min_signals: usize,
    pub min_list_lines: usize,
}

impl From<DetectionRulesConfig> for DetectionRules {
    fn from(config: DetectionRulesConfig) -> Self {
        DetectionRules {
            min_signals: config.min_signals,
            min_list_lines: config.min_list_lines,
        }
    }
}

impl From<&DetectionRulesConfig> for DetectionRules {
    fn from(config: &DetectionRulesConfig) -> Self {
        DetectionRules {
            min_signals: config.min_signals,
            min_list_lines: config.min_list_lines,
        }
    }
}

/// Conversion knobs, grouped by target format.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub markdown: MarkdownConfig,
}

/// Mirrors the Markdown compiler options.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub hardbreaks: bool,
}

impl From<MarkdownConfig> for CompileOptions {
    fn from(config: MarkdownConfig) -> Self {
        CompileOptions {
            hardbreaks: config.hardbreaks,
        }
    }
}

impl From<&MarkdownConfig> for CompileOptions {
    fn from(config: &MarkdownConfig) -> Self {
        CompileOptions {
            hardbreaks: config.hardbreaks,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PagemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PagemarkConfig, ConfigError> {
    Loader::new().build()
}
