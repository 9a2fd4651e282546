// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::Cli;
use crate::core::env::types::Platform;
use crate::logging::LogLevel;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

#[test]
fn test_parse_minimal() {
    let cli = Cli::try_parse_from(["dwenv", "-c", "tools.env", "-x", "python"]).unwrap();
    assert_eq!(cli.launch.configs, [PathBuf::from("tools.env")]);
    assert_eq!(cli.launch.executable, PathBuf::from("python"));
    assert_eq!(cli.launch.arguments, None);
    assert!(!cli.launch.dry_run);
    assert!(!cli.launch.no_override_warnings);
    assert!(cli.global.settings.is_empty());
}

#[test]
fn test_parse_repeated_configs_keep_order() {
    let cli = Cli::try_parse_from([
        "dwenv", "-c", "b.envc", "--config", "a.envc", "-c", "b.envc", "-x", "cmake", "-d",
    ])
    .unwrap();
    assert_eq!(
        cli.launch.configs,
        [
            PathBuf::from("b.envc"),
            PathBuf::from("a.envc"),
            PathBuf::from("b.envc")
        ]
    );
    assert!(cli.launch.dry_run);
}

#[test]
fn test_parse_hyphen_arguments() {
    let cli = Cli::try_parse_from(["dwenv", "-c", "a.envc", "-x", "python", "-a", "-m pip list"])
        .unwrap();
    assert_eq!(cli.launch.arguments.as_deref(), Some("-m pip list"));
}

#[test]
fn test_parse_build_options() {
    let cli = Cli::try_parse_from([
        "dwenv",
        "-c",
        "a.envc",
        "-x",
        "sh",
        "-r",
        "PYTHONPATH",
        "--remove",
        "CONDA_PREFIX",
        "--initial",
        "HOME",
        "-p",
        "windows",
        "--no-override-warnings",
        "--start-env",
        "start.json",
        "--backup-start-env",
        "backup.json",
    ])
    .unwrap();
    assert_eq!(cli.launch.remove, ["PYTHONPATH", "CONDA_PREFIX"]);
    assert_eq!(cli.launch.initial, ["HOME"]);
    assert_eq!(cli.launch.platform, Some(Platform::Windows));
    assert!(cli.launch.no_override_warnings);
    assert_eq!(cli.launch.start_env, Some(PathBuf::from("start.json")));
    assert_eq!(
        cli.launch.backup_start_env,
        Some(PathBuf::from("backup.json"))
    );
}

#[test]
fn test_missing_required_flags() {
    let err = Cli::try_parse_from(["dwenv", "-x", "python"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

    let err = Cli::try_parse_from(["dwenv", "-c", "a.envc"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_log_level_range() {
    let err = Cli::try_parse_from(["dwenv", "-l", "7", "-c", "a.envc", "-x", "sh"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_global_overrides_settings() {
    let cli = Cli::try_parse_from([
        "dwenv",
        "--no-default-settings",
        "-l",
        "1",
        "--log-file",
        "out.log",
        "-c",
        "a.envc",
        "-x",
        "sh",
    ])
    .unwrap();

    let loader = cli
        .global
        .config_loader()
        .add_toml_str("[global]\noutput_log_level = 4\nfile_log_level = 4\n");
    assert!(
        !cli.global
            .config_loader()
            .format_loaded_files()
            .iter()
            .any(|f| f.contains("dwenv.toml"))
    );

    let settings = cli.global.apply_overrides(loader).unwrap().build().unwrap();
    assert_eq!(settings.global.output_log_level, LogLevel::ERROR);
    assert_eq!(settings.global.file_log_level, LogLevel::ERROR);
    assert_eq!(settings.global.log_file, Some(PathBuf::from("out.log")));
}
