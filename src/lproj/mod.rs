// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-language `.lproj` resource directories.
//!
//! The macOS bundle only advertises a localization when a matching
//! `<code>.lproj` directory exists under `Contents/Resources`, so one is
//! created for every language the manifest lists.
//!
//! # Manifest Format
//!
//! ```text
//! # Supported languages     <- ignored, does not start with [a-z]{2}
//! en                        -> "en"
//! fr   # French             -> "fr"
//! zh_CN # Chinese           -> "zh_CN"
//! XX                        <- ignored, uppercase
//! ```
//!
//! # Output
//!
//! ```text
//! work/Processing.app/Contents/Resources/
//!   en.lproj/
//!   fr.lproj/
//!   zh_CN.lproj/
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{FsError, Result};
use crate::utility::fs::write::ensure_dir;

/// One supported locale, e.g. `en` or `zh_CN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Returns the code as written in the manifest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory name for this code, `<code>.lproj`.
    #[must_use]
    pub fn lproj_dir_name(&self) -> String {
        format!("{}.lproj", self.0)
    }

    /// Parses one manifest line. `None` unless the line starts with two
    /// lowercase ASCII letters.
    #[must_use]
    pub fn from_manifest_line(line: &str) -> Option<Self> {
        let starts_with_code = line
            .as_bytes()
            .get(..2)
            .is_some_and(|prefix| prefix.iter().all(u8::is_ascii_lowercase));
        if !starts_with_code {
            return None;
        }
        let code = line.split('#').next().unwrap_or(line).trim();
        Some(Self(code.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed language manifest.
///
/// Holds the raw text; codes are produced lazily by [`Self::codes`], which
/// can be called any number of times.
#[derive(Debug, Clone)]
pub struct LanguageManifest {
    contents: String,
}

impl LanguageManifest {
    /// Reads a manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FsError::from_io(path, e))
            .with_context(|| format!("failed to read language manifest {}", path.display()))?;
        Ok(Self::parse(contents))
    }

    /// Wraps manifest text that is already in memory.
    #[must_use]
    pub fn parse(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// Supported languages in file order.
    pub fn codes(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.contents.lines().filter_map(LanguageCode::from_manifest_line)
    }
}

/// Reads the manifest at `manifest_path` and returns its language list.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read.
pub fn list_supported_languages(manifest_path: &Path) -> Result<LanguageManifest> {
    LanguageManifest::load(manifest_path)
}

/// Result of [`ensure_language_directory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirOutcome {
    /// The directory was created.
    Created,
    /// Something already existed at the path. Not an error.
    AlreadyExists,
    /// Dry run: the directory would have been created.
    WouldCreate,
}

/// Creates `<resources>/<code>.lproj`.
///
/// Only the last path component is created; a missing resource root is an
/// error. An existing directory is reported as [`DirOutcome::AlreadyExists`].
///
/// # Errors
///
/// Returns an `FsError` for any creation failure other than "already exists".
pub fn ensure_language_directory(
    resources: &Path,
    code: &LanguageCode,
    dry_run: bool,
) -> Result<DirOutcome> {
    let dir = resources.join(code.lproj_dir_name());

    if dry_run {
        if dir.exists() {
            debug!(path = %dir.display(), "[DRY-RUN] lproj directory already exists");
            return Ok(DirOutcome::AlreadyExists);
        }
        info!(path = %dir.display(), "[DRY-RUN] would create lproj directory");
        return Ok(DirOutcome::WouldCreate);
    }

    if ensure_dir(&dir)? {
        info!(code = %code, path = %dir.display(), "Created lproj directory");
        Ok(DirOutcome::Created)
    } else {
        debug!(code = %code, path = %dir.display(), "lproj directory already exists");
        Ok(DirOutcome::AlreadyExists)
    }
}

/// Totals for one scaffolding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    /// Directories created (or that would be, in a dry run).
    pub created: Vec<PathBuf>,
    /// Directories that were already present.
    pub existing: Vec<PathBuf>,
}

impl ScaffoldReport {
    /// Number of codes processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}

/// Ensures an `.lproj` directory for every code in the manifest.
///
/// Every code is processed; the first hard failure aborts the run.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or a directory cannot be
/// created for a reason other than already existing.
pub fn scaffold(manifest_path: &Path, resources: &Path, dry_run: bool) -> Result<ScaffoldReport> {
    let manifest = list_supported_languages(manifest_path)?;
    let mut report = ScaffoldReport::default();

    for code in manifest.codes() {
        let dir = resources.join(code.lproj_dir_name());
        match ensure_language_directory(resources, &code, dry_run)
            .with_context(|| format!("failed to create lproj directory for '{code}'"))?
        {
            DirOutcome::Created | DirOutcome::WouldCreate => report.created.push(dir),
            DirOutcome::AlreadyExists => report.existing.push(dir),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests;
