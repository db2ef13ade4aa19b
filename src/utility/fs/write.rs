// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FsError;

/// Replaces the contents of `path` through a temp file in the same directory.
///
/// Readers never see a half-written document. The original permissions are
/// kept when the file already exists.
///
/// # Errors
///
/// Returns an `FsError` if the temp file cannot be created, written, or
/// renamed over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FsError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
    if let Err(e) = tmp.write_all(contents.as_bytes()).and_then(|()| tmp.flush()) {
        return Err(FsError::from_io(tmp.path(), e));
    }

    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| FsError::from_io(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

/// Creates a single directory level.
///
/// Returns `true` when the directory was created and `false` when something
/// already exists at `path`. A missing parent is an error.
///
/// # Errors
///
/// Returns an `FsError` for every failure other than `AlreadyExists`.
pub fn ensure_dir(path: &Path) -> Result<bool, FsError> {
    match std::fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(FsError::from_io(path, e)),
    }
}
