// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! vars: Arc<BTreeMap<String, String>>
//! clone shares the Arc until Arc::make_mut()
//!
//! apply(key, value, Operator, separator) -> Applied
//!   Set      insert / overwrite
//!   Append   existing + sep + value  (skip if already a component)
//!   Prepend  value + sep + existing  (skip if already a component)
//! ```

use super::types::{Applied, Operator};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Keys are case-sensitive. Cloning is cheap and a clone is a snapshot:
/// modifying either copy never affects the other.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: Arc<BTreeMap<String, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        Arc::make_mut(&mut self.vars).insert(key.into(), value.into());
        self
    }

    /// Merges a value into a variable with the given operator.
    ///
    /// `Append` and `Prepend` treat the existing value as a list joined by
    /// `separator` and behave like `Set` when the variable does not exist yet.
    /// A value already present as a list component is left alone.
    pub fn apply(
        &mut self,
        key: &str,
        value: &str,
        operator: Operator,
        separator: char,
    ) -> Applied {
        let vars = Arc::make_mut(&mut self.vars);

        let Some(existing) = vars.get_mut(key) else {
            vars.insert(key.to_string(), value.to_string());
            return Applied::Inserted;
        };

        match operator {
            Operator::Set => {
                value.clone_into(existing);
                Applied::Replaced
            }
            _ if existing.split(separator).any(|part| part == value) => Applied::Unchanged,
            Operator::Append => {
                existing.push(separator);
                existing.push_str(value);
                Applied::Extended
            }
            Operator::Prepend => {
                *existing = format!("{value}{separator}{existing}");
                Applied::Extended
            }
        }
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns true if the variable is set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.vars.contains_key(key) {
            Arc::make_mut(&mut self.vars).remove(key);
        }
        self
    }

    /// Splits a list-valued variable on `separator`.
    ///
    /// Returns an empty list if the variable is not set.
    #[must_use]
    pub fn split(&self, key: &str, separator: char) -> Vec<&str> {
        self.get(key)
            .map(|value| value.split(separator).collect())
            .unwrap_or_default()
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.vars).clone()
    }

    /// Returns an iterator over environment variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns an iterator over variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Formats an environment for display.
///
/// Variables are sorted; every separator-delimited component of a value is
/// listed on its own ` - ` line below the variable name.
#[must_use]
pub fn format_env(env: &Env, separator: char) -> Vec<String> {
    let mut lines = Vec::with_capacity(env.len() * 3);
    for (key, value) in env.iter() {
        lines.push(String::new());
        lines.push(key.to_string());
        for part in value.split(separator) {
            lines.push(format!(" - {part}"));
        }
    }
    lines
}
