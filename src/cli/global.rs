// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Flags shared by every subcommand.
//!
//! They are turned into `section/key=value` overrides and applied after all
//! config files and `PDE_*` variables:
//!
//! ```text
//! -s lproj/resources=out   -> lproj/resources=out
//! -l 4                     -> global/output_log_level=4
//!                             global/file_log_level=4   (unless --file-log-level)
//! --log-file pde.log       -> global/log_file=pde.log
//! --dry                    -> global/dry=true
//! ```

use clap::Args;
use std::path::PathBuf;

/// Flags accepted before the subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Extra TOML config file, loaded after pde.toml. Repeatable.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Report planned directory creations, rewrites and moves without
    /// performing them.
    #[arg(long)]
    pub dry: bool,

    /// Console verbosity: 0 silent, 1 error, 2 warn, 3 info, 4 debug, 5 trace, 6 everything.
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Log file verbosity. Defaults to --log-level when that is given.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Also log to FILE (appended).
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Overrides one config value, e.g. 'rewrite/root=web/content/examples'. Repeatable.
    #[arg(short = 's', long = "set", value_name = "SECTION/KEY=VALUE", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Skip ./pde.toml and only read the --ini files.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// The overrides these flags stand for, `--set` values first.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let flags = [
            self.log_level
                .map(|level| ("global/output_log_level", level.to_string())),
            self.file_log_level
                .or(self.log_level)
                .map(|level| ("global/file_log_level", level.to_string())),
            self.log_file
                .as_ref()
                .map(|path| ("global/log_file", path.display().to_string())),
            self.dry.then(|| ("global/dry", "true".to_string())),
        ];

        self.options
            .iter()
            .cloned()
            .chain(
                flags
                    .into_iter()
                    .flatten()
                    .map(|(key, value)| format!("{key}={value}")),
            )
            .collect()
    }
}
