// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for pde-tools using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pde [global options] <command>
//! version
//! options
//! inis
//! lproj   [--manifest FILE] [--resources DIR] [--list] [--json]
//! rewrite [--root DIR] [--pattern GLOB] [--rename OLD=NEW]...
//!         [--strip-cdata] [--wrap-cdata] [--relocate] [--category NAME]...
//!         [--legacy-paths] [--json]
//! ```

pub mod global;
pub mod lproj;
pub mod rewrite;


use crate::cli::global::GlobalOptions;
use crate::cli::lproj::LprojArgs;
use crate::cli::rewrite::RewriteArgs;
use clap::{Parser, Subcommand};

/// Processing build support tools
///
/// One-shot build steps for the Processing development environment.
#[derive(Debug, Parser)]
#[command(
    name = "pde",
    author,
    version,
    about = "Processing build support tools",
    long_about = "pde-tools Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  `pde lproj` creates one <code>.lproj directory per supported\n\
                  language in the macOS bundle resources. `pde rewrite` applies\n\
                  text migrations to the XML example corpus. Both run with no\n\
                  arguments using the default paths of the build tree.",
    after_help = "CONFIG FILES:\n\n\
                  By default, pde looks for `pde.toml` in the current directory.\n\
                  Additional files can be given with --ini and are loaded after it,\n\
                  each one overriding the previous. PDE_<SECTION>__<KEY> environment\n\
                  variables override the files, and --set overrides everything but\n\
                  the subcommand flags. Use --no-default-inis to skip `pde.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by pde.
    Inis,

    /// Creates the per-language .lproj resource directories.
    Lproj(LprojArgs),

    /// Rewrites the XML example corpus.
    Rewrite(RewriteArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
