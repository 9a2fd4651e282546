// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `dwenv` binary.
//!
//! Runs the compiled binary with realistic command lines.

use std::path::Path;
use std::process::{Command, Output};

use clap::Parser;
use dwenv::cli::Cli;
use tempfile::TempDir;

fn dwenv(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dwenv"))
        .current_dir(cwd)
        .arg("--no-default-settings")
        .args(args)
        .output()
        .expect("dwenv binary should run")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.display().to_string()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_explicit_fragment_list() {
    let cli = Cli::try_parse_from([
        "dwenv", "-c", "base.envc", "-c", "extra.envc", "-x", "cmake", "-a", "--build .",
    ])
    .unwrap();
    assert_eq!(cli.launch.configs.len(), 2);
    assert_eq!(cli.launch.arguments.as_deref(), Some("--build ."));
}

#[test]
fn cli_help_mentions_fragment_syntax() {
    let err = Cli::try_parse_from(["dwenv", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("NAME[.PLATFORM] OP VALUE"));
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn cli_dry_run_prints_environment() {
    let dir = TempDir::new().unwrap();
    let fragment = write(
        dir.path(),
        "tools.envc",
        "TOOLS_HOME = /opt/tools\nTOOLS_PATH > /opt/tools/bin\nTOOLS_PATH < /opt/tools/pre\n",
    );

    let output = dwenv(
        dir.path(),
        &[
            "--initial", "PATH", "-p", "linux", "-c", &fragment, "-x", "dwenv-no-such-tool", "-d",
        ],
    );
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\nTOOLS_HOME\n - /opt/tools\n"), "{stdout}");
    assert!(
        stdout.contains("\nTOOLS_PATH\n - /opt/tools/pre\n - /opt/tools/bin\n"),
        "{stdout}"
    );
    assert!(stdout.contains(&format!("\nDWENV_CONFIG\n - {fragment}\n")), "{stdout}");
}

#[test]
fn cli_bad_fragment_fails() {
    let dir = TempDir::new().unwrap();
    let fragment = write(dir.path(), "bad.envc", "NOT_A_DIRECTIVE\n");

    let output = dwenv(dir.path(), &["-c", &fragment, "-x", "sh", "-d"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("NOT_A_DIRECTIVE"), "{stderr}");
}

#[test]
fn cli_wrong_extension_fails() {
    let dir = TempDir::new().unwrap();
    let output = dwenv(dir.path(), &["-c", "configs.txt", "-x", "sh", "-d"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_missing_executable_fails() {
    let dir = TempDir::new().unwrap();
    let fragment = write(dir.path(), "empty.envc", "");
    let output = dwenv(dir.path(), &["-c", &fragment, "-x", "dwenv-no-such-tool"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("executable not found"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn cli_launch_passes_exit_code_and_env() {
    let dir = TempDir::new().unwrap();
    let fragment = write(dir.path(), "tools.envc", "EXIT_WITH = 7\n");

    let output = dwenv(
        dir.path(),
        &["-c", &fragment, "-x", "sh", "-a", "-c 'echo launched; exit $EXIT_WITH'"],
    );
    assert_eq!(output.status.code(), Some(7));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "launched");
}

#[test]
fn cli_settings_file_sets_platform() {
    let dir = TempDir::new().unwrap();
    let fragment = write(dir.path(), "tools.envc", "SEP_TEST > a\nSEP_TEST > b\n");
    let settings = write(dir.path(), "ci.toml", "[build]\nplatform = \"windows\"\n");

    let output = dwenv(
        dir.path(),
        &[
            "--settings", &settings, "--initial", "PATH", "-c", &fragment, "-x", "sh", "-d",
        ],
    );
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\nSEP_TEST\n - a\n - b\n"), "{stdout}");
}
