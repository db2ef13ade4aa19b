// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result, RewriteError};
use anyhow::Context;
use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::trace;
use wax::{Glob, Pattern};

/// What [`collect_files`] visits.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Visit dotfiles and dot-directories.
    #[builder(setters(name = with_include_hidden), default = true)]
    include_hidden: bool,
    /// Honor `.gitignore`, `.ignore` and global git excludes.
    #[builder(setters(name = with_respect_ignore_files), default = false)]
    respect_ignore_files: bool,
    /// Glob matched against the path relative to the root.
    #[builder(setters(name = with_pattern))]
    pattern: Option<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(options.respect_ignore_files)
        .hidden(!options.include_hidden)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder
}

/// Collects every file under `root`, in walk order.
///
/// The list is complete before the caller touches anything, so files that
/// get moved while processing are never visited twice.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
/// - Any entry cannot be read. Walk errors abort the whole traversal.
///
/// # Example
/// ```no_run
/// use pde_tools::utility::fs::walk::{collect_files, WalkOptions};
///
/// let options = WalkOptions::builder()
///     .with_pattern("**/*.xml".to_string())
///     .build();
/// for file in collect_files("content/examples", &options)? {
///     println!("{}", file.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn collect_files<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    let glob = options
        .pattern
        .as_deref()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| RewriteError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()?;

    let mut files = Vec::new();
    for entry in build_walker(root, options).build() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if let Some(glob) = &glob {
            let relative = path.strip_prefix(root).unwrap_or(path);
            if !glob.is_match(relative) {
                trace!(path = %path.display(), "skipped by pattern");
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}
