//! Configuration for the langtag toolchain.
//!
//! `defaults/langtag.default.toml` is embedded into the library so the
//! documented defaults and runtime behavior stay in sync. Applications layer
//! user files and single-key overrides on top of those defaults via [`Loader`]
//! before deserializing into [`LangtagConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/langtag.default.toml");

/// Top-level configuration consumed by langtag applications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LangtagConfig {
    pub parser: ParserOptions,
    pub output: OutputConfig,
}

/// Knobs of the locale identifier parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Inputs longer than this many bytes are rejected without scanning.
    /// Unbounded unless a configuration layer sets it
    pub max_length: usize,
    /// Title-case the script and upper-case the region of the primary
    /// language identifier
    pub canonical_case: bool,
    /// Accept extension sections; when false only a language identifier is
    /// accepted
    pub extensions: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_length: usize::MAX,
            canonical_case: true,
            extensions: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How the CLI prints parse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
    Canonical,
    Debug,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["json", "yaml", "canonical", "debug"];
}

/// Layers `langtag.toml` files and CLI flags over `defaults/langtag.default.toml`.
///
/// Later layers win. Nothing is read from disk until [`Loader::build`].
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist when the loader is built
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that is skipped when absent, such as a per-user
    /// `langtag.toml`
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `parser.max_length`, above every file layer
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize them into a [`LangtagConfig`]
    pub fn build(self) -> Result<LangtagConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration the CLI runs with when given no file and no flags
pub fn load_defaults() -> Result<LangtagConfig, ConfigError> {
    Loader::new().build()
}
