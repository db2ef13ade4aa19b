// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging built on `tracing`.
//!
//! ```text
//! [global] output_log_level ---> console layer (stderr, EnvFilter)
//!          file_log_level   -+
//!          log_file         -+-> file layer (appender, non_blocking)
//!
//! RUST_LOG, when set, replaces the console filter.
//! ```
//!
//! Levels 3..=5 only raise our own targets; dependencies stay at `warn`
//! until level 6.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::types::GlobalConfig;
use crate::error::{ConfigError, Result};

#[cfg(test)]
mod tests;

/// Verbosity, configured as an integer from 0 to 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    /// One line per created directory, rewritten or moved file.
    #[default]
    Info = 3,
    /// Adds skipped files and no-op rewrites.
    Debug = 4,
    /// Adds every visited path.
    Trace = 5,
    /// Trace for every crate, walker internals included.
    Dump = 6,
}

impl LogLevel {
    const ALL: [Self; 7] = [
        Self::Silent,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
        Self::Dump,
    ];

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` above 6.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-6, got {level}"),
        })
    }

    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if (level as usize) < Self::ALL.len() {
            Some(Self::ALL[level as usize])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    const fn own_level(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace | Self::Dump => "trace",
        }
    }

    /// `EnvFilter` directives for this level.
    #[must_use]
    pub fn directives(self) -> String {
        match self {
            Self::Silent | Self::Error | Self::Warn | Self::Dump => self.own_level().to_string(),
            Self::Info | Self::Debug | Self::Trace => {
                let level = self.own_level();
                format!("warn,pde_tools={level},pde={level}")
            }
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, ConfigError> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::Trace)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<PathBuf>,
    #[builder(setters(name = with_show_target), default = false)]
    show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    /// Logging as configured in `[global]`.
    #[must_use]
    pub fn from_global(global: &GlobalConfig) -> Self {
        Self::builder()
            .with_console_level(global.output_log_level)
            .with_file_level(global.file_log_level)
            .maybe_with_log_file(global.log_file.clone())
            .with_show_target(global.output_log_level >= LogLevel::Trace)
            .build()
    }

    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn show_target(&self) -> bool {
        self.show_target
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("log file has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// The log file is appended to, and its directory is created if needed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Example
///
/// ```no_run
/// use pde_tools::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::Debug)
///     .with_log_file("logs/pde.log".into())
///     .build();
///
/// let _guard = init_logging(&config)?;
/// tracing::info!("ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.console_level().directives()));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target())
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_filter(console_filter);

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(config.file_level().directives()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
