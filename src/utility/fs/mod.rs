// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:   collect_files()   ignore::Walk, sorted by file name
//!         WalkOptions       max_depth, hidden, gitignore, glob filter
//! write:  write_atomic()    tempfile in the same directory, then persist
//!         ensure_dir()      single-level create_dir, AlreadyExists is Ok
//! ```

pub mod walk;
pub mod write;
