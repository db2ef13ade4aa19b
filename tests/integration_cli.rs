// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use pde_tools::cli::{Cli, Command};
use pde_tools::cmd::lproj::resolve_lproj_config;
use pde_tools::cmd::rewrite::resolve_rewrite_config;
use pde_tools::config::types::{LprojConfig, RewriteConfig, TagRename};
use pde_tools::rewrite::RewriteOps;
use std::path::PathBuf;

// =============================================================================
// Scripts run with no arguments
// =============================================================================

#[test]
fn cli_lproj_no_args_uses_defaults() {
    let cli = Cli::try_parse_from(["pde", "lproj"]).unwrap();
    let Some(Command::Lproj(args)) = cli.command else {
        panic!("expected lproj command");
    };
    assert_eq!(
        resolve_lproj_config(&args, &LprojConfig::default()),
        LprojConfig::default()
    );
}

#[test]
fn cli_rewrite_no_args_selects_nothing() {
    let cli = Cli::try_parse_from(["pde", "rewrite"]).unwrap();
    let Some(Command::Rewrite(args)) = cli.command else {
        panic!("expected rewrite command");
    };
    let config = resolve_rewrite_config(&args, &RewriteConfig::default());
    assert!(RewriteOps::from_config(&config).is_empty());
    assert_eq!(config, RewriteConfig::default());
}

// =============================================================================
// Lproj Command
// =============================================================================

#[test]
fn cli_lproj_paths_override_config() {
    let cli = Cli::try_parse_from([
        "pde",
        "lproj",
        "-m",
        "languages.txt",
        "--resources",
        "out/Resources",
    ])
    .unwrap();
    let Some(Command::Lproj(args)) = cli.command else {
        panic!("expected lproj command");
    };
    let lproj = resolve_lproj_config(&args, &LprojConfig::default());
    assert_eq!(lproj.manifest, PathBuf::from("languages.txt"));
    assert_eq!(lproj.resources, PathBuf::from("out/Resources"));
    assert!(!args.list);
}

// =============================================================================
// Rewrite Command
// =============================================================================

#[test]
fn cli_rewrite_flags_layer_over_config() {
    let base = RewriteConfig {
        renames: vec![TagRename {
            from: "desc".to_string(),
            to: "description".to_string(),
        }],
        strip_cdata: true,
        ..RewriteConfig::default()
    };
    let cli = Cli::try_parse_from([
        "pde",
        "rewrite",
        "--root",
        "web/content/examples",
        "--rename",
        "ex=example",
        "--relocate",
        "--category",
        "Iteration",
        "--category",
        "Conditionals",
        "--legacy-paths",
    ])
    .unwrap();
    let Some(Command::Rewrite(args)) = cli.command else {
        panic!("expected rewrite command");
    };

    let config = resolve_rewrite_config(&args, &base);

    assert_eq!(config.root, PathBuf::from("web/content/examples"));
    assert_eq!(config.renames.len(), 2);
    assert_eq!(config.renames[1].to, "example");
    assert_eq!(config.categories, ["Iteration", "Conditionals"]);
    assert!(config.legacy_concat_paths);
    assert_eq!(
        RewriteOps::from_config(&config),
        RewriteOps::RENAME_TAGS | RewriteOps::STRIP_CDATA | RewriteOps::RELOCATE
    );
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["pde", "build"]).is_err());
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["pde", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}
