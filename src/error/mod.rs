// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types.
//!
//! Library functions return typed errors; commands wrap them in `anyhow`
//! with `.context(..)`.
//!
//! ```text
//!        PdeError (16 bytes)
//!               |
//!   +-------+---+---+-------+
//!   |       |       |       |
//!   v       v       v       v
//!  Cfg      Fs   Rewrite    Io
//!  Box     Box     Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config   MissingKey, InvalidValue
//!   Fs       NotFound, PermissionDenied, IoError
//!   Rewrite  InvalidTagName, InvalidPattern, NotUtf8
//!
//! "directory already exists" is not an error: see lproj::DirOutcome.
//! ```

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Command-level result, errors carry a context chain.
pub type Result<T> = anyhow::Result<T>;

pub type PdeResult<T> = std::result::Result<T, PdeError>;

/// Any typed failure of a pde operation.
///
/// Variants are boxed so the enum stays two words wide.
#[derive(Debug, Error)]
pub enum PdeError {
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    #[error("rewrite error: {0}")]
    Rewrite(#[from] Box<RewriteError>),

    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// `From<E> for PdeError`, boxing `E`.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PdeError {
                fn from(err: $error) -> Self {
                    PdeError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    FsError => Fs,
    RewriteError => Rewrite,
    std::io::Error => Io,
}

/// Bad or missing configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Present but unusable, e.g. a log level above 6.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

/// Failures touching the build tree.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path not found: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Anything else, with the original error kept as source.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while operating on `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound(path),
            ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::IoError { path, source },
        }
    }
}

/// Errors raised while rewriting example documents.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Tag name cannot be used in a tag pattern.
    #[error("invalid tag name '{0}'")]
    InvalidTagName(String),

    /// File filter glob failed to compile.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Document is not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    NotUtf8(String),
}

#[cfg(test)]
mod tests;
