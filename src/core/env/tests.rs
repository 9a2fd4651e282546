// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::current_env;
use crate::core::env::container::{Env, format_env};
use crate::core::env::types::{Applied, Operator, Platform};
use std::collections::BTreeMap;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("foo"), None, "keys are case-sensitive");
    assert_eq!(env.get("NOTEXIST"), None);
    assert!(env.contains("FOO"));

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_env_apply_operators() {
    let mut env = Env::new();

    let results = vec![
        env.apply("KEY", "initial", Operator::Append, ':'),
        env.apply("KEY", "appended", Operator::Append, ':'),
        env.apply("KEY", "prepended", Operator::Prepend, ':'),
        env.apply("KEY", "appended", Operator::Append, ':'),
        env.apply("KEY", "prepended", Operator::Prepend, ':'),
    ];

    assert_eq!(
        results,
        vec![
            Applied::Inserted,
            Applied::Extended,
            Applied::Extended,
            Applied::Unchanged,
            Applied::Unchanged,
        ]
    );
    assert_eq!(env.get("KEY"), Some("prepended:initial:appended"));

    assert_eq!(env.apply("KEY", "replaced", Operator::Set, ':'), Applied::Replaced);
    assert_eq!(env.get("KEY"), Some("replaced"));
}

#[test]
fn test_env_apply_uses_separator() {
    let mut env = Env::new();
    env.set("PATH", r"C:\Windows;C:\Tools");

    env.apply("PATH", r"C:\Tools", Operator::Append, ';');
    assert_eq!(env.get("PATH"), Some(r"C:\Windows;C:\Tools"));

    env.apply("PATH", r"C:\Python", Operator::Prepend, ';');
    assert_eq!(env.get("PATH"), Some(r"C:\Python;C:\Windows;C:\Tools"));
    assert_eq!(env.split("PATH", ';').len(), 3);
}

#[test]
fn test_env_dedup_matches_whole_components() {
    let mut env = Env::new();
    env.set("PATH", "/usr/local/bin");

    // "/usr" is a prefix of a component, not a component
    env.apply("PATH", "/usr", Operator::Append, ':');
    assert_eq!(env.get("PATH"), Some("/usr/local/bin:/usr"));
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    // Clone shares data initially
    let mut env2 = env1.clone();

    // Modifying env2 triggers copy-on-write, doesn't affect env1
    env2.set("KEY2", "value2");
    env2.remove("KEY1");

    assert_eq!(env1.get("KEY1"), Some("value1"));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), None);
    assert_eq!(env2.get("KEY2"), Some("value2"));
}

#[test]
fn test_current_env() {
    // Behavioral test - PATH should exist
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_env_from_map_and_to_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = Env::from_map(map.clone());

    assert_eq!(env.len(), 2);
    assert_eq!(env.to_map(), map);
    assert_eq!(env.keys().collect::<Vec<_>>(), vec!["KEY1", "KEY2"]);
}

#[test]
fn test_format_env() {
    let env: Env = [("PATH", "/b:/a"), ("EDITOR", "vim")].into_iter().collect();

    assert_eq!(
        format_env(&env, ':'),
        vec!["", "EDITOR", " - vim", "", "PATH", " - /b", " - /a"]
    );
}

#[test]
fn test_platform_names() {
    assert_eq!(Platform::from("windows"), Platform::Windows);
    assert_eq!(Platform::from("macos"), Platform::Darwin);
    assert_eq!(Platform::from("freebsd"), Platform::Other("freebsd".to_string()));
    assert_eq!(Platform::Darwin.to_string(), "darwin");
    assert!(Platform::Linux.matches("linux"));
    assert!(!Platform::Linux.matches("Linux"));
}

#[test]
fn test_platform_filter_aliases() {
    assert!(Platform::Darwin.matches("macos"));
    assert!(Platform::Darwin.matches("darwin"));
    assert!(!Platform::Linux.matches("macos"));
    assert!(Platform::Other("freebsd".into()).matches("freebsd"));
}

#[test]
fn test_platform_separator() {
    assert_eq!(Platform::Windows.separator(), ';');
    assert_eq!(Platform::Linux.separator(), ':');
    assert_eq!(Platform::Darwin.separator(), ':');
    assert_eq!(Platform::Other("freebsd".into()).separator(), ':');
}

#[test]
fn test_operator_delimiters() {
    for op in [Operator::Set, Operator::Append, Operator::Prepend] {
        assert_eq!(Operator::from_delimiter(op.delimiter()), Some(op));
    }
    assert_eq!(Operator::from_delimiter("="), None);
}
