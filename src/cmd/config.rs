// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `pde options` and `pde inis`.

use crate::config::Config;

/// Prints the effective configuration as aligned `key = value` lines.
pub fn run_options_command(config: &Config) {
    println!("{}", config.format_options().join("\n"));
}

/// Prints the config files that were read, in load order.
pub fn run_inis_command(loaded: &[String]) {
    if loaded.is_empty() {
        println!("no config files found, using built-in defaults");
        return;
    }
    println!("{}", loaded.join("\n"));
}
