// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for pde-tools.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (the paths of the Processing build tree)
//! 2. pde.toml (cwd)
//! 3. --ini FILE...
//! 4. PDE_* env vars
//! 5. --set section/key=value
//! 6. subcommand flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PDE_GLOBAL__DRY=true             → global.dry = true
//! PDE_LPROJ__RESOURCES=/path       → lproj.resources = "/path"
//! PDE_REWRITE__WRAP_CDATA=true     → rewrite.wrap_cdata = true
//! ```
//!
//! # Example
//!
//! ```toml
//! [lproj]
//! manifest = "build/shared/lib/languages/languages.txt"
//!
//! [rewrite]
//! root = "content/examples"
//! pattern = "**/*.xml"
//! wrap_cdata = true
//!
//! [[rewrite.renames]]
//! from = "desc"
//! to = "description"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, LprojConfig, RewriteConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Language directory scaffolding.
    pub lproj: LprojConfig,
    /// Example corpus rewriting.
    pub rewrite: RewriteConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pde_tools::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("pde.toml")
    ///     .with_env_prefix("PDE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for empty required paths or bad tag names.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let required = [
            ("lproj", "manifest", &self.lproj.manifest),
            ("lproj", "resources", &self.lproj.resources),
            ("rewrite", "root", &self.rewrite.root),
        ];
        if let Some((section, key, _)) = required
            .iter()
            .find(|(_, _, path)| path.as_os_str().is_empty())
        {
            return Err(ConfigError::MissingKey {
                section: (*section).to_string(),
                key: (*key).to_string(),
            });
        }
        for rename in &self.rewrite.renames {
            rename.validate()?;
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_lproj_options(&mut options);
        self.format_rewrite_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_lproj_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "lproj.manifest".into(),
            self.lproj.manifest.display().to_string(),
        );
        options.insert(
            "lproj.resources".into(),
            self.lproj.resources.display().to_string(),
        );
    }

    fn format_rewrite_options(&self, options: &mut BTreeMap<String, String>) {
        let rewrite = &self.rewrite;
        options.insert("rewrite.root".into(), rewrite.root.display().to_string());
        if let Some(pattern) = &rewrite.pattern {
            options.insert("rewrite.pattern".into(), pattern.clone());
        }
        if !rewrite.renames.is_empty() {
            let renames: Vec<String> = rewrite
                .renames
                .iter()
                .map(|r| format!("{}={}", r.from, r.to))
                .collect();
            options.insert("rewrite.renames".into(), renames.join(", "));
        }
        options.insert("rewrite.wrap_cdata".into(), rewrite.wrap_cdata.to_string());
        options.insert(
            "rewrite.strip_cdata".into(),
            rewrite.strip_cdata.to_string(),
        );
        options.insert("rewrite.relocate".into(), rewrite.relocate.to_string());
        options.insert("rewrite.categories".into(), rewrite.categories.join(", "));
        options.insert(
            "rewrite.legacy_concat_paths".into(),
            rewrite.legacy_concat_paths.to_string(),
        );
    }
}
