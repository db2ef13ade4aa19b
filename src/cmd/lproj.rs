// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lproj command implementation for pde-tools.

use crate::cli::lproj::LprojArgs;
use crate::config::Config;
use crate::config::types::LprojConfig;
use crate::error::Result;
use crate::lproj::{list_supported_languages, scaffold};
use anyhow::Context;
use tracing::info;

/// Main handler for the lproj command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or a directory cannot be
/// created.
pub fn run_lproj_command(args: &LprojArgs, config: &Config) -> Result<()> {
    let lproj = resolve_lproj_config(args, &config.lproj);

    if args.list {
        let manifest = list_supported_languages(&lproj.manifest)?;
        for code in manifest.codes() {
            println!("{code}");
        }
        return Ok(());
    }

    info!(
        manifest = %lproj.manifest.display(),
        resources = %lproj.resources.display(),
        "Creating lproj directories"
    );

    let report = scaffold(&lproj.manifest, &lproj.resources, config.global.dry)?;

    info!(
        languages = report.total(),
        created = report.created.len(),
        existing = report.existing.len(),
        "lproj directories ready"
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize lproj report")?;
        println!("{json}");
    }
    Ok(())
}

/// Layers the command-line flags over the configured values.
#[must_use]
pub fn resolve_lproj_config(args: &LprojArgs, base: &LprojConfig) -> LprojConfig {
    let mut lproj = base.clone();
    if let Some(manifest) = &args.manifest {
        lproj.manifest.clone_from(manifest);
    }
    if let Some(resources) = &args.resources {
        lproj.resources.clone_from(resources);
    }
    lproj
}
