// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for pde-tools.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, LprojConfig, RewriteConfig
//! RewriteConfig.renames: [TagRename { from, to }]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Subcategories whose examples are moved into `include/`.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Primitive",
    "Composite",
    "Relational Operators",
    "Iteration",
    "Conditionals",
    "Logical Operators",
];

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log planned filesystem changes without making them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::Info,
            file_log_level: LogLevel::Trace,
            log_file: None,
        }
    }
}

/// Language directory scaffolding options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LprojConfig {
    /// Language manifest, one code per line.
    pub manifest: PathBuf,
    /// Resource root that receives the `<code>.lproj` directories.
    pub resources: PathBuf,
}

impl Default for LprojConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("build/shared/lib/languages/languages.txt"),
            resources: PathBuf::from("work/Processing.app/Contents/Resources"),
        }
    }
}

/// A single `<from>` to `<to>` tag rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagRename {
    pub from: String,
    pub to: String,
}

impl FromStr for TagRename {
    type Err = ConfigError;

    /// Parses `old=new`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            section: "rewrite".to_string(),
            key: "renames".to_string(),
            message: format!("{message}, got '{s}'"),
        };

        let (from, to) = s.split_once('=').ok_or_else(|| invalid("expected OLD=NEW"))?;
        let rename = Self {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        };
        rename.validate()?;
        Ok(rename)
    }
}

impl TagRename {
    /// Checks that both names are plain XML tag names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad tag.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for name in [&self.from, &self.to] {
            if !is_tag_name(name) {
                return Err(ConfigError::InvalidValue {
                    section: "rewrite".to_string(),
                    key: "renames".to_string(),
                    message: format!("'{name}' is not a valid tag name"),
                });
            }
        }
        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_.:-]*`
#[must_use]
pub fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}

/// Example corpus rewrite options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteConfig {
    /// Corpus root, traversed recursively.
    pub root: PathBuf,
    /// Glob relative to `root` selecting files. Every file when unset.
    pub pattern: Option<String>,
    /// Tag renames, applied in order.
    pub renames: Vec<TagRename>,
    /// Wrap `<code>` bodies in CDATA sections.
    pub wrap_cdata: bool,
    /// Strip CDATA markers.
    pub strip_cdata: bool,
    /// Move allow-listed subcategories into `include/`.
    pub relocate: bool,
    /// Subcategory allow-list for relocation.
    pub categories: Vec<String>,
    /// Build relocation targets by string concatenation, as the legacy
    /// migration script did (`<dir>include/<file>`).
    pub legacy_concat_paths: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("content/examples"),
            pattern: None,
            renames: Vec::new(),
            wrap_cdata: false,
            strip_cdata: false,
            relocate: false,
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            legacy_concat_paths: false,
        }
    }
}
