// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Example corpus rewriting.
//!
//! One-shot migrations over the hand-authored XML examples of the reference
//! site. Nothing runs unless selected; with an empty [`RewriteOps`] the
//! traversal only visits files.
//!
//! # Per-file Pipeline
//!
//! ```text
//! read (UTF-8)
//!   |
//!   v
//! RENAME_TAGS  -> STRIP_CDATA -> WRAP_CDATA (.xml only)
//!   |
//!   v
//! write_atomic (only if changed)
//!   |
//!   v
//! RELOCATE: <subcategory> in allow-list?  dir/file.xml -> dir/include/file.xml
//! ```
//!
//! Any error aborts the whole run.

pub mod text;


use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bitflags::bitflags;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::config::types::RewriteConfig;
use crate::error::{FsError, PdeResult, Result, RewriteError};
use crate::utility::fs::walk::{WalkOptions, collect_files};
use crate::utility::fs::write::{ensure_dir, write_atomic};

use text::TagRenamer;

bitflags! {
    /// Operations applied to each visited document.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RewriteOps: u8 {
        /// Apply the configured tag renames.
        const RENAME_TAGS = 0x01;

        /// Strip CDATA markers.
        const STRIP_CDATA = 0x02;

        /// Wrap `<code>` bodies in CDATA (XML files only).
        const WRAP_CDATA = 0x04;

        /// Move allow-listed subcategories into `include/`.
        const RELOCATE = 0x08;
    }
}

impl RewriteOps {
    /// Operations switched on in `config`.
    #[must_use]
    pub fn from_config(config: &RewriteConfig) -> Self {
        let mut ops = Self::empty();
        ops.set(Self::RENAME_TAGS, !config.renames.is_empty());
        ops.set(Self::STRIP_CDATA, config.strip_cdata);
        ops.set(Self::WRAP_CDATA, config.wrap_cdata);
        ops.set(Self::RELOCATE, config.relocate);
        ops
    }
}

/// What happened to one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// Content changed (or would have, in a dry run).
    pub rewritten: bool,
    /// New location after relocation.
    pub relocated: Option<PathBuf>,
}

/// Totals for one rewrite run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// Files visited by the traversal.
    pub visited: usize,
    /// Files whose content changed.
    pub rewritten: usize,
    /// `(from, to)` for every moved file.
    pub relocated: Vec<(PathBuf, PathBuf)>,
}

/// Applies text rewrites to documents on disk.
#[derive(Debug, Clone)]
pub struct Rewriter {
    renames: Vec<TagRenamer>,
    categories: Vec<String>,
    legacy_concat_paths: bool,
    dry_run: bool,
}

impl Rewriter {
    /// Compiles the renames in `config`.
    ///
    /// # Errors
    ///
    /// Returns `RewriteError::InvalidTagName` for a bad rename.
    pub fn new(config: &RewriteConfig, dry_run: bool) -> std::result::Result<Self, RewriteError> {
        let renames = config
            .renames
            .iter()
            .map(|r| TagRenamer::new(&r.from, &r.to))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            renames,
            categories: config.categories.clone(),
            legacy_concat_paths: config.legacy_concat_paths,
            dry_run,
        })
    }

    /// Renames every `<from>...</from>` pair in the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is invalid or the file cannot be read or written.
    pub fn rename_tag(&self, path: &Path, from: &str, to: &str) -> Result<bool> {
        let renamer = TagRenamer::new(from, to)?;
        let original = read_document(path)?;
        let updated = renamer.apply(&original);
        self.commit(path, &original, &updated)
    }

    /// Wraps `<code>` bodies in CDATA. Files without an `.xml` extension are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn wrap_code_in_cdata(&self, path: &Path) -> Result<bool> {
        if !is_xml(path) {
            debug!(path = %path.display(), "not an XML file, skipping CDATA wrap");
            return Ok(false);
        }
        let original = read_document(path)?;
        let updated = text::wrap_code_in_cdata(&original);
        self.commit(path, &original, &updated)
    }

    /// Strips CDATA markers and logs a confirmation for the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn remove_cdata(&self, path: &Path) -> Result<bool> {
        let original = read_document(path)?;
        let updated = text::remove_cdata(&original);
        let changed = self.commit(path, &original, &updated)?;
        info!(path = %path.display(), "Removed CDATA markers");
        Ok(changed)
    }

    /// Moves the document into `include/` when its subcategory is allow-listed.
    ///
    /// Returns the new path, or `None` if the file stays where it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or moved.
    pub fn relocate_by_category(&self, path: &Path) -> Result<Option<PathBuf>> {
        let contents = read_document(path)?;
        self.relocate(path, &contents)
    }

    /// Applies `ops` to one document: text rewrites in pipeline order, one
    /// write, then relocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, written, or moved.
    pub fn process(&self, path: &Path, ops: RewriteOps) -> Result<FileOutcome> {
        if ops.is_empty() {
            trace!(path = %path.display(), "visited");
            return Ok(FileOutcome::default());
        }

        let original = read_document(path)?;
        let mut contents = original.clone();

        if ops.contains(RewriteOps::RENAME_TAGS) {
            for renamer in &self.renames {
                contents = renamer.apply(&contents).into_owned();
            }
        }
        if ops.contains(RewriteOps::STRIP_CDATA) {
            contents = text::remove_cdata(&contents).into_owned();
            info!(path = %path.display(), "Removed CDATA markers");
        }
        if ops.contains(RewriteOps::WRAP_CDATA) && is_xml(path) {
            contents = text::wrap_code_in_cdata(&contents).into_owned();
        }

        let rewritten = self.commit(path, &original, &contents)?;

        let relocated = if ops.contains(RewriteOps::RELOCATE) {
            self.relocate(path, &contents)?
        } else {
            None
        };

        Ok(FileOutcome {
            rewritten,
            relocated,
        })
    }

    /// Writes `updated` over `path` if it differs from `original`.
    fn commit(&self, path: &Path, original: &str, updated: &str) -> Result<bool> {
        if original == updated {
            debug!(path = %path.display(), "unchanged");
            return Ok(false);
        }

        if self.dry_run {
            info!(path = %path.display(), "[DRY-RUN] would rewrite");
        } else {
            write_atomic(path, updated)?;
            info!(path = %path.display(), "Rewrote");
        }
        Ok(true)
    }

    fn relocate(&self, path: &Path, contents: &str) -> Result<Option<PathBuf>> {
        let Some(category) = text::subcategory(contents) else {
            debug!(path = %path.display(), "no subcategory, not relocating");
            return Ok(None);
        };
        if !self.categories.iter().any(|c| c == category) {
            debug!(path = %path.display(), category, "subcategory not in allow-list");
            return Ok(None);
        }
        let Some(target) = relocation_target(path, self.legacy_concat_paths) else {
            return Ok(None);
        };

        if self.dry_run {
            info!(from = %path.display(), to = %target.display(), category, "[DRY-RUN] would relocate");
            return Ok(Some(target));
        }

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            ensure_dir(parent)?;
        }
        std::fs::rename(path, &target)
            .map_err(|e| FsError::from_io(path, e))
            .with_context(|| format!("failed to move {} to {}", path.display(), target.display()))?;

        info!(from = %path.display(), to = %target.display(), category, "Relocated");
        Ok(Some(target))
    }
}

/// Where relocation moves `path`.
///
/// The default is `<dir>/include/<file>`. `legacy_concat` builds the path by
/// string concatenation, `<dir>include/<file>`, dropping the separator after
/// `<dir>`; this matches the paths produced by the old migration script.
#[must_use]
pub fn relocation_target(path: &Path, legacy_concat: bool) -> Option<PathBuf> {
    let file_name = path.file_name()?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    if legacy_concat {
        let mut target = OsString::from(dir.as_os_str());
        target.push("include/");
        target.push(file_name);
        Some(PathBuf::from(target))
    } else {
        Some(dir.join("include").join(file_name))
    }
}

/// Rewrites every document under `config.root`.
///
/// The file list is collected up front. The first failure aborts the run.
///
/// # Errors
///
/// Returns an error if the root is missing, the pattern or a rename is
/// invalid, or any document cannot be read, written, or moved.
pub fn run(config: &RewriteConfig, ops: RewriteOps, dry_run: bool) -> Result<RewriteReport> {
    let rewriter = Rewriter::new(config, dry_run)?;
    let options = WalkOptions::builder()
        .maybe_with_pattern(config.pattern.clone())
        .build();
    let files = collect_files(&config.root, &options)
        .with_context(|| format!("failed to scan {}", config.root.display()))?;

    if ops.is_empty() {
        debug!("no operations selected, traversal only");
    }

    let mut report = RewriteReport::default();
    for path in files {
        let outcome = rewriter
            .process(&path, ops)
            .with_context(|| format!("failed to rewrite {}", path.display()))?;

        report.visited += 1;
        if outcome.rewritten {
            report.rewritten += 1;
        }
        if let Some(target) = outcome.relocated {
            report.relocated.push((path, target));
        }
    }

    Ok(report)
}

fn is_xml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

fn read_document(path: &Path) -> PdeResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            RewriteError::NotUtf8(path.display().to_string()).into()
        } else {
            FsError::from_io(path, e).into()
        }
    })
}
