// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Lproj | Rewrite
//! ```

use std::process::ExitCode;

use pde_tools::cli::global::GlobalOptions;
use pde_tools::cli::{self, Command};
use pde_tools::cmd::config::{run_inis_command, run_options_command};
use pde_tools::cmd::lproj::run_lproj_command;
use pde_tools::cmd::rewrite::run_rewrite_command;
use pde_tools::config::Config;
use pde_tools::config::loader::ConfigLoader;
use pde_tools::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            return ExitCode::SUCCESS;
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(_) => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn start_logging(config: &Config) -> pde_tools::error::Result<LogGuard> {
    init_logging(&LogConfig::from_global(&config.global))
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Lproj(args)) => run_lproj_command(args, config),
        Some(Command::Rewrite(args)) => run_rewrite_command(args, config),
        Some(Command::Version | Command::Inis) | None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("pde.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("PDE")
}

fn load_config(global: &GlobalOptions) -> pde_tools::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    loader.build()
}
