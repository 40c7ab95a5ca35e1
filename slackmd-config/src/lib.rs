//! Shared configuration loader for the slackmd toolchain.
//!
//! `defaults/slackmd.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SlackmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use slackmd_babel::{DisplayZone, PublishSpec, TranslatorOptions, ZoneError};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/slackmd.default.toml");

/// Top-level configuration consumed by slackmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackmdConfig {
    pub archive: ArchiveConfig,
    pub render: RenderConfig,
    pub inspect: InspectConfig,
}

/// How the export is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    pub chunk_size: usize,
}

/// How pages are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub title: String,
    pub utc_offset: String,
}

impl RenderConfig {
    pub fn zone(&self) -> Result<DisplayZone, ZoneError> {
        self.utc_offset.parse()
    }
}

impl TryFrom<&RenderConfig> for TranslatorOptions {
    type Error = ZoneError;

    fn try_from(config: &RenderConfig) -> Result<Self, Self::Error> {
        Ok(TranslatorOptions {
            zone: config.zone()?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub pretty_json: bool,
}

impl SlackmdConfig {
    /// Publish settings for converting `source` into `output`.
    pub fn publish_spec(
        &self,
        source: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<PublishSpec, ZoneError> {
        let options = TranslatorOptions::try_from(&self.render)?;
        Ok(PublishSpec::new(source, output)
            .with_chunk_size(self.archive.chunk_size)
            .with_title(self.render.title.clone())
            .with_options(options))
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

    /// Apply a single key/value override (command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SlackmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SlackmdConfig, ConfigError> {
    Loader::new().build()
}
