// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment building.
//!
//! # Pipeline
//!
//! ```text
//! build_env(configs, &BuildOptions)
//!   StartEnv --> backup --> remove --> whitelist
//!        |
//!   configs (or DWENV_CONFIG) --> normalize() --> [a.envc, b.envc, ...]
//!        |
//!        v
//!   EnvBuilder (sequential fold)
//!     for each fragment, for each directive:
//!       platform filter --> interpolate ${VAR} --> Env::apply()
//!       Set over an existing variable --> OverrideWarning
//!        |
//!        v
//!   BuildReport { env, warnings }
//! ```
//!
//! Order is the only source of truth: a directive sees every value set by
//! the directives before it. Any error aborts the build.

pub mod start;


use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::configs::paths::PathResolver;
use crate::configs::{ConfigsInput, normalize};
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::env::types::{Applied, Operator, Platform};
use crate::error::{DwenvResult, EnvError};
use crate::fragment::{Directive, interpolate, parse_file};
use start::StartEnv;

/// Variable holding the configs path of a build.
pub const CONFIG_VAR: &str = "DWENV_CONFIG";

/// A `Set` directive replaced a variable that already had a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideWarning {
    /// File name of the fragment that replaced the value.
    pub fragment: String,
    /// Replaced variable.
    pub variable: String,
}

/// Result of a build.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// The final environment.
    pub env: Env,
    /// Overrides detected while building, empty if warnings are disabled.
    pub warnings: Vec<OverrideWarning>,
}

/// Options for [`build_env`].
#[derive(Debug, Clone, Builder)]
pub struct BuildOptions {
    #[builder(setters(name = with_start_env), default)]
    start_env: StartEnv,
    #[builder(setters(name = with_vars_to_remove), default)]
    vars_to_remove: Vec<String>,
    #[builder(setters(name = with_initial_vars), default)]
    initial_vars: Vec<String>,
    #[builder(setters(name = with_override_warnings), default = true)]
    override_warnings: bool,
    #[builder(setters(name = with_target_platform), default)]
    target_platform: Platform,
    #[builder(setters(name = with_start_env_backup))]
    start_env_backup: Option<PathBuf>,
    /// Snapshot of the process environment.
    #[builder(setters(name = with_host), default = current_env())]
    host: Env,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BuildOptions {
    #[must_use]
    pub const fn start_env(&self) -> &StartEnv {
        &self.start_env
    }

    #[must_use]
    pub fn vars_to_remove(&self) -> &[String] {
        &self.vars_to_remove
    }

    #[must_use]
    pub fn initial_vars(&self) -> &[String] {
        &self.initial_vars
    }

    #[must_use]
    pub const fn override_warnings(&self) -> bool {
        self.override_warnings
    }

    #[must_use]
    pub const fn target_platform(&self) -> &Platform {
        &self.target_platform
    }

    #[must_use]
    pub fn start_env_backup(&self) -> Option<&Path> {
        self.start_env_backup.as_deref()
    }

    #[must_use]
    pub const fn host(&self) -> &Env {
        &self.host
    }
}

/// Applies fragments onto an environment, one directive at a time.
#[derive(Debug, Clone)]
pub struct EnvBuilder {
    env: Env,
    platform: Platform,
    override_warnings: bool,
    home: Option<String>,
    warnings: Vec<OverrideWarning>,
}

impl EnvBuilder {
    /// Starts a build from `base` for `platform`.
    ///
    /// Override warnings are enabled by default.
    #[must_use]
    pub const fn new(base: Env, platform: Platform) -> Self {
        Self {
            env: base,
            platform,
            override_warnings: true,
            home: None,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_override_warnings(mut self, enabled: bool) -> Self {
        self.override_warnings = enabled;
        self
    }

    /// Sets the directory a leading `~` in values expands to.
    #[must_use]
    pub fn with_home(mut self, home: Option<String>) -> Self {
        self.home = home;
        self
    }

    /// Returns the environment built so far.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Parses and applies a fragment file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed; nothing from
    /// the file is applied in that case.
    pub fn apply_fragment(&mut self, path: &Path) -> DwenvResult<()> {
        let directives = parse_file(path)?;
        let source = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        debug!(fragment = %path.display(), directives = directives.len(), "applying fragment");
        for directive in &directives {
            self.apply_directive(directive, &source);
        }
        Ok(())
    }

    /// Applies one directive. `source` names its fragment in warnings.
    pub fn apply_directive(&mut self, directive: &Directive, source: &str) {
        if let Some(filter) = &directive.platform
            && !self.platform.matches(filter)
        {
            trace!(variable = %directive.variable, platform = %filter, "skipped for platform");
            return;
        }

        let value = interpolate(&directive.value, &self.env, self.home.as_deref());
        let name = directive.variable.as_str();

        if directive.operator == Operator::Set
            && self.override_warnings
            && self.env.contains(name)
        {
            warn!(fragment = %source, variable = %name, "replacing existing variable");
            self.warnings.push(OverrideWarning {
                fragment: source.to_string(),
                variable: name.to_string(),
            });
        }

        let applied = self
            .env
            .apply(name, &value, directive.operator, self.platform.separator());
        if applied == Applied::Unchanged {
            trace!(variable = %name, value = %value, "value already present");
        } else {
            trace!(variable = %name, value = %value, ?applied, "applied");
        }
    }

    /// Ends the build.
    #[must_use]
    pub fn finish(self) -> BuildReport {
        BuildReport {
            env: self.env,
            warnings: self.warnings,
        }
    }
}

/// Applies `fragments` in order onto `base`.
///
/// # Errors
///
/// Returns the first read or parse error; no partial environment is returned.
pub fn apply_fragments(
    base: Env,
    fragments: &[PathBuf],
    platform: Platform,
    override_warnings: bool,
) -> DwenvResult<BuildReport> {
    let mut builder = EnvBuilder::new(base, platform).with_override_warnings(override_warnings);
    for fragment in fragments {
        builder.apply_fragment(fragment)?;
    }
    Ok(builder.finish())
}

/// Builds an environment from a starting environment and configuration files.
///
/// With `configs` unset, the configs path is read from `DWENV_CONFIG` in the
/// starting environment. A configs argument naming a single list or fragment
/// file is recorded in `DWENV_CONFIG`.
///
/// # Errors
///
/// Returns an error if the starting environment cannot be loaded, a
/// whitelisted variable or `DWENV_CONFIG` is missing, a configuration file is
/// missing or has the wrong extension, or a fragment cannot be parsed.
pub fn build_env(configs: Option<ConfigsInput>, options: &BuildOptions) -> DwenvResult<BuildReport> {
    let resolver = PathResolver::new(options.host().clone());
    let mut env = options.start_env().load(options.host(), &resolver)?;

    if let Some(backup) = options.start_env_backup() {
        start::write_snapshot(&env, &resolver.expand(backup))?;
    }

    for name in options.vars_to_remove() {
        env.remove(name);
    }

    if !options.initial_vars().is_empty() {
        env = start::whitelist(options.host(), options.initial_vars())?;
    }

    let configs = match configs {
        Some(configs) => {
            if let Some(path) = configs.single_path() {
                env.set(CONFIG_VAR, path.display().to_string());
            }
            configs
        }
        None => {
            let path = env.get(CONFIG_VAR).ok_or_else(|| EnvError::KeyMissing {
                key: CONFIG_VAR.to_string(),
            })?;
            ConfigsInput::from_path(path)?
        }
    };

    let fragments = normalize(&configs, &resolver)?;
    debug!(
        fragments = fragments.len(),
        platform = %options.target_platform(),
        "building environment"
    );

    let mut builder = EnvBuilder::new(env, options.target_platform().clone())
        .with_override_warnings(options.override_warnings())
        .with_home(resolver.home_dir().map(str::to_string));
    for fragment in &fragments {
        builder.apply_fragment(fragment)?;
    }
    Ok(builder.finish())
}
