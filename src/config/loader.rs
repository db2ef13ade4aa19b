// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! Sources are merged in the order they are added; later ones win. The
//! environment layer, when enabled, is applied last before the overrides.
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional("pde.toml")
//!   .add_toml_file(--ini)
//!   .with_env_prefix("PDE")
//!   .set_option("section/key=value")
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// A config source that was added to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file that must exist.
    File(PathBuf),
    /// An optional file that was present when added.
    OptionalFile(PathBuf),
    /// Inline TOML text.
    Inline,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => f.write_str("[string] <string>"),
        }
    }
}

/// Collects config sources and builds a validated [`Config`].
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<Source>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        if required {
            self.sources.push(Source::File(path.to_path_buf()));
        } else if path.is_file() {
            self.sources.push(Source::OptionalFile(path.to_path_buf()));
        }
        self
    }

    /// Adds a TOML file that must exist when [`Self::build`] runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_file(path.as_ref(), false)
    }

    /// Adds inline TOML text.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(Source::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides `key` (dotted, e.g. `rewrite.root`) with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid config override '{key}'"))?;
        Ok(self)
    }

    /// Applies a `section/key=value` override, as given to `--set`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the option is not of that shape.
    pub fn set_option(self, option: &str) -> Result<Self> {
        let (section, key, value) = parse_option(option)?;
        self.set(&format!("{section}.{key}"), value)
    }

    /// Merges every source and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is not valid
    /// TOML, a value has the wrong type or an unknown key is present, or
    /// [`Config::validate`] fails.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Sources in the order they were added.
    #[must_use]
    pub fn loaded_files(&self) -> &[Source] {
        &self.sources
    }

    /// Numbered source list for `pde inis`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `section/key=value`.
fn parse_option(option: &str) -> std::result::Result<(&str, &str, &str), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        section: "cli".to_string(),
        key: "set".to_string(),
        message: format!("expected 'section/key=value', got '{option}'"),
    };

    let (path, value) = option.split_once('=').ok_or_else(invalid)?;
    let (section, key) = path.split_once('/').ok_or_else(invalid)?;
    let (section, key) = (section.trim(), key.trim());
    if section.is_empty() || key.is_empty() {
        return Err(invalid());
    }
    Ok((section, key, value.trim()))
}
