// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fragment (`.envc`) parsing.
//!
//! # Grammar
//!
//! ```text
//! NAME[.PLATFORM] OP VALUE
//!
//! OP     " = "  Set      NEW_VAR = test
//!        " > "  Append   PATH > ${ROOT}/bin
//!        " < "  Prepend  PATH < ${ROOT}/first
//! #, //  comment lines (after trimming)
//! ```
//!
//! A line must contain exactly one operator. Values are kept raw here and
//! interpolated by the builder against the environment built so far.

#[cfg(test)]
mod tests;

use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

use crate::configs::is_comment;
use crate::configs::paths::expand_home;
use crate::core::env::container::Env;
use crate::core::env::types::Operator;
use crate::error::{ConfigError, DwenvResult, FragmentError};

static OPERATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" [=<>] ").expect("operator pattern is valid"));

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]*)\}").expect("placeholder pattern is valid"));

/// One parsed fragment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Variable name.
    pub variable: String,
    /// Platform filter, `None` applies everywhere.
    pub platform: Option<String>,
    /// Merge operator.
    pub operator: Operator,
    /// Raw value, may contain `${NAME}` placeholders.
    pub value: String,
    /// 1-based line number in the source.
    pub line: usize,
}

/// Parses one line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns `FragmentError::Syntax` if the line does not contain exactly one
/// operator, or `FragmentError::InvalidName` if the variable part is not
/// `NAME` or `NAME.PLATFORM`.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Directive>, FragmentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || is_comment(trimmed) {
        return Ok(None);
    }

    let syntax_error = || FragmentError::Syntax {
        path: String::new(),
        line,
        text: trimmed.to_string(),
    };

    let mut matches = OPERATOR_PATTERN.find_iter(trimmed);
    let (Some(op), None) = (matches.next(), matches.next()) else {
        return Err(syntax_error());
    };
    let operator = Operator::from_delimiter(op.as_str()).ok_or_else(syntax_error)?;

    let name_part = &trimmed[..op.start()];
    let value = &trimmed[op.end()..];

    let invalid_name = || FragmentError::InvalidName {
        path: String::new(),
        line,
        name: name_part.to_string(),
        text: trimmed.to_string(),
    };

    let (variable, platform) = match name_part.split('.').collect::<Vec<_>>()[..] {
        [variable] => (variable, None),
        [variable, platform] if !platform.is_empty() => (variable, Some(platform.to_string())),
        _ => return Err(invalid_name()),
    };
    if variable.is_empty() {
        return Err(invalid_name());
    }

    Ok(Some(Directive {
        variable: variable.to_string(),
        platform,
        operator,
        value: value.to_string(),
        line,
    }))
}

/// Parses fragment text, in line order.
///
/// # Errors
///
/// Returns the first `FragmentError` encountered.
pub fn parse_str(content: &str) -> Result<Vec<Directive>, FragmentError> {
    let mut directives = Vec::new();
    for (index, text) in content.lines().enumerate() {
        if let Some(directive) = parse_line(text, index + 1)? {
            directives.push(directive);
        }
    }
    Ok(directives)
}

/// Reads and parses a fragment file.
///
/// # Errors
///
/// Returns `ConfigError::ReadError` if the file cannot be read, or a
/// `FragmentError` naming the file if a line is malformed.
pub fn parse_file(path: &Path) -> DwenvResult<Vec<Directive>> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&content).map_err(|e| e.with_path(path.display().to_string()).into())
}

/// Interpolates a directive value against the environment built so far.
///
/// A leading `~` becomes `home`. Every `${NAME}` is replaced by the value of
/// `NAME` in `env` in a single pass; unknown names are left as written and
/// substituted values are not expanded again.
#[must_use]
pub fn interpolate(value: &str, env: &Env, home: Option<&str>) -> String {
    let value = expand_home(value, home);
    PLACEHOLDER_PATTERN
        .replace_all(&value, |caps: &Captures<'_>| {
            env.get(&caps[1])
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}
