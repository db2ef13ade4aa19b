// pde-tools: Processing build support tools
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:   collect_files(), WalkOptions  (sorted, sequential)
//!   write:  write_atomic(), ensure_dir()
//! ```

pub mod fs;
