// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning inside a built environment.
//!
//! ```text
//! ProcessBuilder::new("python", built)
//!   .shell_args("-m pip list")
//!   .run()
//!       --> resolve_program()  which_in(built PATH)
//!       --> tokio::process::Command  env_clear + built env
//!           stdio inherited
//!           Ctrl+C --> kill child --> ProcessError::Interrupted
//!       --> ProcessOutput { exit_code }
//! ```

pub mod builder;
mod runner;
