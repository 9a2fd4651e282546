// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch command implementation.
//!
//! ```text
//! LaunchArgs + [build] settings + host snapshot
//!        |
//!        v
//!   BuildOptions --> build_env() --> BuildReport
//!        |
//!   --dry-run? --yes--> format_env() --> stdout, exit 0
//!        | no
//!        v
//!   ProcessBuilder(executable).shell_args(-a).env(built)
//!        |
//!        v
//!   child exit code
//! ```

use anyhow::Context;
use tracing::info;

use crate::builder::start::StartEnv;
use crate::builder::{BuildOptions, BuildReport, build_env};
use crate::cli::launch::LaunchArgs;
use crate::config::Settings;
use crate::config::types::BuildSettings;
use crate::configs::ConfigsInput;
use crate::core::env::container::{Env, format_env};
use crate::core::env::current_env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Main handler: builds the environment, then prints it or launches in it.
///
/// Returns the exit code the CLI should exit with: the child's on launch,
/// `0` on a dry run.
///
/// # Errors
///
/// Returns an error if the environment cannot be built, the arguments cannot
/// be split, or the executable cannot be found or spawned.
pub async fn run_launch_command(args: &LaunchArgs, settings: &Settings) -> Result<i32> {
    let options = build_options(args, &settings.build, current_env());
    let configs = ConfigsInput::from_paths(args.configs.clone())?;

    let report = build_env(Some(configs), &options).context("failed to build environment")?;

    if args.dry_run {
        for line in dry_run_lines(&report, &options) {
            println!("{line}");
        }
        return Ok(0);
    }

    let mut process = ProcessBuilder::new(&args.executable, report.env);
    if let Some(arguments) = &args.arguments {
        process = process.shell_args(arguments)?;
    }

    info!(cmd = %process.command_line(), "launching");
    let output = process
        .run()
        .await
        .with_context(|| format!("failed to launch {}", args.executable.display()))?;

    info!(exit_code = output.exit_code(), "process exited");
    Ok(output.exit_code())
}

/// Merges CLI flags over the `[build]` settings.
///
/// Removals from both sources apply; every other flag replaces its setting.
#[must_use]
pub fn build_options(args: &LaunchArgs, settings: &BuildSettings, host: Env) -> BuildOptions {
    let platform = args
        .platform
        .clone()
        .or_else(|| settings.platform.clone())
        .unwrap_or_default();

    let start_env = args
        .start_env
        .clone()
        .or_else(|| settings.start_env.clone())
        .map_or(StartEnv::Current, StartEnv::File);

    let mut vars_to_remove = settings.remove.clone();
    vars_to_remove.extend(args.remove.iter().cloned());

    let initial_vars = if args.initial.is_empty() {
        settings.initial.clone()
    } else {
        args.initial.clone()
    };

    BuildOptions::builder()
        .with_start_env(start_env)
        .with_vars_to_remove(vars_to_remove)
        .with_initial_vars(initial_vars)
        .with_override_warnings(settings.override_warnings && !args.no_override_warnings)
        .with_target_platform(platform)
        .maybe_with_start_env_backup(
            args.backup_start_env
                .clone()
                .or_else(|| settings.start_env_backup.clone()),
        )
        .with_host(host)
        .build()
}

/// Renders a built environment the way `--dry-run` prints it.
#[must_use]
pub fn dry_run_lines(report: &BuildReport, options: &BuildOptions) -> Vec<String> {
    format_env(&report.env, options.target_platform().separator())
}
