// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{Error, ErrorKind};
use std::path::Path;

use super::{ConfigError, FsError, PdeError, PdeResult, RewriteError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "lproj".to_string(),
        key: "manifest".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'manifest' in section '[lproj]'");
}

#[test]
fn test_pde_error_size() {
    // Thin boxes only: pointer + discriminant
    let size = std::mem::size_of::<PdeError>();
    assert!(size <= 16, "PdeError is {size} bytes, expected <= 16");
}

#[test]
fn test_pde_result_size() {
    let size = std::mem::size_of::<PdeResult<()>>();
    assert!(size <= 16, "PdeResult<()> is {size} bytes, expected <= 16");
}

#[test]
fn test_fs_error_from_io_kinds() {
    let path = Path::new("work/Resources");

    let not_found = FsError::from_io(path, Error::from(ErrorKind::NotFound));
    assert!(matches!(not_found, FsError::NotFound(ref p) if p == "work/Resources"));

    let denied = FsError::from_io(path, Error::from(ErrorKind::PermissionDenied));
    assert!(matches!(denied, FsError::PermissionDenied(_)));

    let other = FsError::from_io(path, Error::other("disk on fire"));
    insta::assert_snapshot!(other.to_string(), @"I/O error on 'work/Resources': disk on fire");
}

#[test]
fn test_boxed_conversions() {
    let err: PdeError = RewriteError::InvalidTagName("<bad>".to_string()).into();
    insta::assert_snapshot!(err.to_string(), @"rewrite error: invalid tag name '<bad>'");

    let err: PdeError = FsError::NotFound("languages.txt".to_string()).into();
    insta::assert_snapshot!(err.to_string(), @"filesystem error: path not found: languages.txt");
}
