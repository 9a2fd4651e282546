// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration set normalization.
//!
//! # Inputs
//!
//! ```text
//! ConfigsInput::from_path(path)
//!   *.env   --> ListFile   one fragment path per line
//!   *.envc  --> Fragment   single fragment
//!   other   --> ConfigError::WrongExtension
//! ConfigsInput::Explicit([..])   fragment paths given directly
//!
//! normalize(input, resolver)
//!   --> Vec<PathBuf>  (expanded, existence-checked, order kept)
//! ```
//!
//! List files skip blank lines and lines starting with `#` or `//`. The
//! comment check runs on the raw line, so an indented `#` is read as a path.

pub mod paths;


use std::path::{Path, PathBuf};

use crate::error::{ConfigError, DwenvResult};
use paths::PathResolver;

/// Extension of list files.
pub const LIST_EXTENSION: &str = "env";

/// Extension of fragment files.
pub const FRAGMENT_EXTENSION: &str = "envc";

/// Line prefixes marking comments in list and fragment files.
pub const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

/// The set of configuration files a build applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigsInput {
    /// A `.env` file listing fragment files.
    ListFile(PathBuf),
    /// A single `.envc` fragment file.
    Fragment(PathBuf),
    /// Fragment files given directly, in application order.
    Explicit(Vec<PathBuf>),
}

impl ConfigsInput {
    /// Classifies a single configs path by its extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WrongExtension` for anything other than `.env`
    /// or `.envc`.
    pub fn from_path(path: impl Into<PathBuf>) -> DwenvResult<Self> {
        let path = path.into();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(LIST_EXTENSION) => Ok(Self::ListFile(path)),
            Some(FRAGMENT_EXTENSION) => Ok(Self::Fragment(path)),
            _ => Err(ConfigError::WrongExtension {
                path: path.display().to_string(),
            }
            .into()),
        }
    }

    /// Builds the input from one or more paths.
    ///
    /// A single path is classified by extension; several paths form an
    /// explicit fragment list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WrongExtension` if a single path has an
    /// unsupported extension.
    pub fn from_paths(mut paths: Vec<PathBuf>) -> DwenvResult<Self> {
        if paths.len() == 1 {
            Self::from_path(paths.remove(0))
        } else {
            Ok(Self::Explicit(paths))
        }
    }

    /// Returns the single path this input was built from, if any.
    #[must_use]
    pub fn single_path(&self) -> Option<&Path> {
        match self {
            Self::ListFile(path) | Self::Fragment(path) => Some(path),
            Self::Explicit(_) => None,
        }
    }
}

/// Returns true if `line` starts with a comment prefix.
#[must_use]
pub fn is_comment(line: &str) -> bool {
    COMMENT_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Produces the ordered list of fragment files to apply.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the list file or any referenced
/// fragment does not exist, or `ConfigError::ReadError` if the list file
/// cannot be read.
pub fn normalize(input: &ConfigsInput, resolver: &PathResolver) -> DwenvResult<Vec<PathBuf>> {
    match input {
        ConfigsInput::Explicit(paths) => paths
            .iter()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| resolver.resolve_existing(p))
            .collect(),
        ConfigsInput::Fragment(path) => Ok(vec![resolver.resolve_existing(path)?]),
        ConfigsInput::ListFile(path) => {
            let list = resolver.resolve_existing(path)?;
            let content =
                std::fs::read_to_string(&list).map_err(|source| ConfigError::ReadError {
                    path: list.display().to_string(),
                    source,
                })?;
            tracing::debug!(list = %list.display(), "reading list file");
            content
                .lines()
                .filter(|line| !line.trim().is_empty() && !is_comment(line))
                .map(|line| resolver.resolve_existing(line.trim()))
                .collect()
        }
    }
}
