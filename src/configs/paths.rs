// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path expansion against a host environment snapshot.
//!
//! ```text
//! "~/envs/${STUDIO}/maya.envc"
//!   ~         --> HOME (USERPROFILE on Windows)
//!   ${NAME}   --> host value, unknown tokens left as-is
//!   $NAME     --> host value, unknown tokens left as-is
//! ```

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::error::{ConfigError, DwenvResult};

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("variable pattern is valid")
});

/// Expands user-home and environment references in configuration paths.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    host: Env,
}

impl PathResolver {
    /// Creates a resolver reading variables from `host`.
    #[must_use]
    pub const fn new(host: Env) -> Self {
        Self { host }
    }

    /// Creates a resolver from a snapshot of the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::new(current_env())
    }

    /// Returns the home directory of the host environment, if known.
    #[must_use]
    pub fn home_dir(&self) -> Option<&str> {
        home_dir(&self.host)
    }

    /// Expands `~`, `${NAME}` and `$NAME` in `path`.
    #[must_use]
    pub fn expand(&self, path: impl AsRef<Path>) -> PathBuf {
        let raw = path.as_ref().to_string_lossy();
        let raw = expand_home(&raw, self.home_dir());
        let expanded = VAR_PATTERN.replace_all(&raw, |caps: &Captures<'_>| {
            let name = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            self.host
                .get(name)
                .map_or_else(|| caps[0].to_string(), str::to_string)
        });
        PathBuf::from(expanded.into_owned())
    }

    /// Expands `path` and checks that it exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the expanded path does not exist.
    pub fn resolve_existing(&self, path: impl AsRef<Path>) -> DwenvResult<PathBuf> {
        let resolved = self.expand(path);
        if resolved.exists() {
            Ok(resolved)
        } else {
            Err(ConfigError::NotFound(resolved.display().to_string()).into())
        }
    }
}

/// Returns the non-empty home directory variable of `env`.
pub(crate) fn home_dir(env: &Env) -> Option<&str> {
    let key = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    env.get(key).filter(|v| !v.is_empty())
}

/// Replaces a leading `~` (alone or before a separator) with `home`.
pub(crate) fn expand_home<'a>(text: &'a str, home: Option<&str>) -> std::borrow::Cow<'a, str> {
    let Some(home) = home else {
        return text.into();
    };
    match text.strip_prefix('~') {
        Some("") => home.to_string().into(),
        Some(rest) if rest.starts_with(['/', '\\']) => format!("{home}{rest}").into(),
        _ => text.into(),
    }
}
