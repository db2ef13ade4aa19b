// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lproj command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `lproj` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LprojArgs {
    /// Language manifest, one code per line [config: lproj.manifest].
    #[arg(short = 'm', long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Resource directory receiving the .lproj directories [config: lproj.resources].
    #[arg(short = 'r', long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Only prints the supported languages, creates nothing.
    #[arg(long)]
    pub list: bool,

    /// Prints the scaffolding report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}
