// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Settings --> cmd::launch::run_launch_command
//!   build_env --> --dry-run ? print : launch --> exit code
//! ```

pub mod launch;
