// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rewrite command implementation for pde-tools.

use crate::cli::rewrite::RewriteArgs;
use crate::config::Config;
use crate::config::types::RewriteConfig;
use crate::error::Result;
use crate::rewrite::{RewriteOps, run};
use anyhow::Context;
use tracing::info;

/// Main handler for the rewrite command.
///
/// # Errors
///
/// Returns an error if a rename or the pattern is invalid, or if any document
/// cannot be read, written, or moved.
pub fn run_rewrite_command(args: &RewriteArgs, config: &Config) -> Result<()> {
    let rewrite = resolve_rewrite_config(args, &config.rewrite);
    let ops = RewriteOps::from_config(&rewrite);

    info!(root = %rewrite.root.display(), ?ops, "Rewriting examples");

    let report = run(&rewrite, ops, config.global.dry)?;

    info!(
        visited = report.visited,
        rewritten = report.rewritten,
        relocated = report.relocated.len(),
        "Rewrite complete"
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize rewrite report")?;
        println!("{json}");
    }
    Ok(())
}

/// Layers the command-line flags over the configured values.
///
/// Renames are appended, a non-empty `--category` list replaces the
/// allow-list, and operation flags can only switch operations on.
#[must_use]
pub fn resolve_rewrite_config(args: &RewriteArgs, base: &RewriteConfig) -> RewriteConfig {
    let mut rewrite = base.clone();
    if let Some(root) = &args.root {
        rewrite.root.clone_from(root);
    }
    if let Some(pattern) = &args.pattern {
        rewrite.pattern = Some(pattern.clone());
    }
    rewrite.renames.extend(args.renames.iter().cloned());
    rewrite.strip_cdata |= args.strip_cdata;
    rewrite.wrap_cdata |= args.wrap_cdata;
    rewrite.relocate |= args.relocate;
    if !args.categories.is_empty() {
        rewrite.categories.clone_from(&args.categories);
    }
    rewrite.legacy_concat_paths |= args.legacy_paths;
    rewrite
}
