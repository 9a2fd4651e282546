// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Directive, interpolate, parse_file, parse_line, parse_str};
use crate::core::env::container::Env;
use crate::core::env::types::Operator;
use crate::error::FragmentError;
use std::io::Write;

fn directive(line: &str) -> Directive {
    parse_line(line, 1)
        .expect("line should parse")
        .expect("line should yield a directive")
}

#[test]
fn test_parse_operators() {
    let set = directive("NEW_VAR = test");
    let append = directive("PATH > ${CONFIGS_ROOT}/appended");
    let prepend = directive("PATH < ${CONFIGS_ROOT}/prepended");

    assert_eq!(set.variable, "NEW_VAR");
    assert_eq!(set.operator, Operator::Set);
    assert_eq!(set.value, "test");
    assert_eq!(append.operator, Operator::Append);
    assert_eq!(append.value, "${CONFIGS_ROOT}/appended");
    assert_eq!(prepend.operator, Operator::Prepend);
    assert_eq!(prepend.platform, None);
}

#[test]
fn test_parse_platform_filter() {
    let d = directive("PLATFORMVAR.linux = linuxvar");
    assert_eq!(d.variable, "PLATFORMVAR");
    assert_eq!(d.platform.as_deref(), Some("linux"));
    assert_eq!(d.value, "linuxvar");
}

#[test]
fn test_parse_skips_blank_and_comments() {
    for line in ["", "   ", "# comment", "// comment", "   # indented comment"] {
        assert_eq!(parse_line(line, 1).unwrap(), None, "line {line:?}");
    }
}

#[test]
fn test_parse_trims_line() {
    let d = directive("   EDITOR = vim   ");
    assert_eq!(d.variable, "EDITOR");
    assert_eq!(d.value, "vim");
}

#[test]
fn test_parse_value_keeps_inner_text() {
    // Only a space-padded operator counts as a delimiter
    let d = directive("OPTS = --level=3 --fast");
    assert_eq!(d.value, "--level=3 --fast");

    let d = directive("URL = http://host/a>b");
    assert_eq!(d.value, "http://host/a>b");
}

#[test]
fn test_parse_missing_operator() {
    let err = parse_line("NOT_A_DIRECTIVE", 4).unwrap_err();
    assert!(matches!(err, FragmentError::Syntax { line: 4, .. }));
    assert_eq!(err.text(), "NOT_A_DIRECTIVE");
}

#[test]
fn test_parse_unpadded_operator() {
    assert!(parse_line("A=b", 1).is_err());
    assert!(parse_line("A =b", 1).is_err());
}

#[test]
fn test_parse_several_operators() {
    let err = parse_line("A = b > c", 1).unwrap_err();
    assert!(matches!(err, FragmentError::Syntax { .. }));
}

#[test]
fn test_parse_invalid_names() {
    for line in ["A.B.C = x", ".linux = x", "A. = x"] {
        let err = parse_line(line, 1).unwrap_err();
        assert!(
            matches!(err, FragmentError::InvalidName { .. }),
            "line {line:?} gave {err:?}"
        );
    }
}

#[test]
fn test_parse_str_line_numbers() {
    let content = "# tools\n\nA = 1\n// note\nB > 2\n";
    let directives = parse_str(content).unwrap();

    let lines: Vec<_> = directives.iter().map(|d| (d.variable.as_str(), d.line)).collect();
    assert_eq!(lines, vec![("A", 3), ("B", 5)]);
}

#[test]
fn test_parse_file_reports_path() {
    let mut file = tempfile::Builder::new()
        .suffix(".envc")
        .tempfile()
        .unwrap();
    writeln!(file, "A = 1").unwrap();
    writeln!(file, "broken line").unwrap();

    let err = parse_file(file.path()).unwrap_err();
    let fragment = err.as_fragment().expect("fragment error");
    assert!(matches!(fragment, FragmentError::Syntax { line: 2, .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_parse_file_missing() {
    let err = parse_file(std::path::Path::new("/nonexistent/dwenv/a.envc")).unwrap_err();
    assert!(err.as_config().is_some());
}

#[test]
fn test_interpolate_single_pass() {
    let env: Env = [("ROOT", "/opt"), ("LOOP", "${ROOT}")].into_iter().collect();

    assert_eq!(interpolate("${ROOT}/bin", &env, None), "/opt/bin");
    assert_eq!(interpolate("${ROOT}:${ROOT}", &env, None), "/opt:/opt");
    assert_eq!(interpolate("${MISSING}/bin", &env, None), "${MISSING}/bin");
    // substituted text is not expanded again
    assert_eq!(interpolate("${LOOP}", &env, None), "${ROOT}");
    // only the braced form is recognised in values
    assert_eq!(interpolate("$ROOT", &env, None), "$ROOT");
}

#[test]
fn test_interpolate_home() {
    let env = Env::new();
    assert_eq!(interpolate("~/tools", &env, Some("/home/me")), "/home/me/tools");
    assert_eq!(interpolate("~", &env, Some("/home/me")), "/home/me");
    assert_eq!(interpolate("a~b", &env, Some("/home/me")), "a~b");
    assert_eq!(interpolate("~/tools", &env, None), "~/tools");
}
