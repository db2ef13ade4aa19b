// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rewrite command arguments.
//!
//! # Flag Effects
//!
//! ```text
//! no operation flag     → traversal only, nothing is modified
//! --rename OLD=NEW      → appended to rewrite.renames
//! --category NAME       → replaces rewrite.categories
//! flags only switch operations on; config can't be overridden to off here
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::TagRename;

/// Arguments for the `rewrite` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RewriteArgs {
    /// Corpus root, traversed recursively [config: rewrite.root].
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only rewrites files matching this glob, relative to the root.
    #[arg(short = 'p', long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Renames <OLD>...</OLD> to <NEW>...</NEW>. Can be specified multiple times.
    #[arg(long = "rename", value_name = "OLD=NEW")]
    pub renames: Vec<TagRename>,

    /// Strips all CDATA markers.
    #[arg(long)]
    pub strip_cdata: bool,

    /// Wraps <code> bodies of .xml files in CDATA sections.
    #[arg(long)]
    pub wrap_cdata: bool,

    /// Moves examples whose <subcategory> is allow-listed into include/.
    #[arg(long)]
    pub relocate: bool,

    /// Subcategory allow-list for --relocate. Can be specified multiple times.
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Builds relocation targets as <dir>include/<file>, like the legacy
    /// migration script did.
    #[arg(long = "legacy-paths")]
    pub legacy_paths: bool,

    /// Prints the run report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}
