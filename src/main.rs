// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> run_launch_command
//!                                             |
//!                                   child exit code / 1 on error
//! ```

use std::process::ExitCode;

use dwenv::cli::{self, Cli};
use dwenv::cmd::launch::run_launch_command;
use dwenv::config::Settings;
use dwenv::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    for line in cli.global.config_loader().format_loaded_files() {
        tracing::debug!("settings file {line}");
    }
    for line in settings.format_options() {
        tracing::trace!("{line}");
    }

    match run_launch_command(&cli.launch, &settings).await {
        Ok(code) => exit_code(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings(cli: &Cli) -> dwenv::error::Result<Settings> {
    let loader = cli.global.config_loader();
    Ok(cli.global.apply_overrides(loader)?.build()?)
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.global.output_log_level)
        .with_file_level(settings.global.file_log_level)
        .maybe_with_log_file(
            settings
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

/// Maps a child exit code onto the range a process can exit with.
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
