// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Platform: Windows → "windows" (';') / Linux → "linux" (':')
//!           Darwin → "darwin" (':') / Other(name) (':')
//! Operator: Set " = " | Append " > " | Prepend " < "
//! Applied:  Inserted | Replaced | Extended | Unchanged
//! ```

use serde::{Deserialize, Serialize};

/// Target platform a build is evaluated for.
///
/// Names are lower-case, as in fragment filters (`PATH.windows > ...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Windows,
    Linux,
    Darwin,
    /// Any other platform, kept verbatim.
    Other(String),
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        std::env::consts::OS.into()
    }

    /// Returns the lower-case identifier used in fragment filters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Other(name) => name,
        }
    }

    /// Returns the separator used to join list-valued variables like `PATH`.
    #[must_use]
    pub const fn separator(&self) -> char {
        match self {
            Self::Windows => ';',
            _ => ':',
        }
    }

    /// Checks whether a fragment platform filter selects this platform.
    ///
    /// Filters go through the same aliases as platform names, so `macos`
    /// selects `Darwin`.
    #[must_use]
    pub fn matches(&self, filter: &str) -> bool {
        Self::from(filter) == *self
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        match s {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Platform {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.as_str().to_string()
    }
}

impl std::str::FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a value is merged into a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// Replace the existing value (default)
    #[default]
    Set,
    /// Append to the existing list value
    Append,
    /// Prepend to the existing list value
    Prepend,
}

impl Operator {
    /// Returns the fragment delimiter for this operator.
    #[must_use]
    pub const fn delimiter(&self) -> &'static str {
        match self {
            Self::Set => " = ",
            Self::Append => " > ",
            Self::Prepend => " < ",
        }
    }

    /// Parses a fragment delimiter.
    #[must_use]
    pub fn from_delimiter(delimiter: &str) -> Option<Self> {
        match delimiter {
            " = " => Some(Self::Set),
            " > " => Some(Self::Append),
            " < " => Some(Self::Prepend),
            _ => None,
        }
    }
}

/// Outcome of applying a value to an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The variable did not exist and was created.
    Inserted,
    /// An existing variable was overwritten.
    Replaced,
    /// The value was joined onto an existing list.
    Extended,
    /// The value was already a list component.
    Unchanged,
}
