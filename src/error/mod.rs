// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            DwenvError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+
//!   |        |        |        |        |
//!   v        v        v        v        v
//! Config  Fragment   Env    Process  Io
//!  Box      Box      Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config   NotFound, WrongExtension, ReadError, ParseError, InvalidValue
//!   Fragment Syntax, InvalidName
//!   Env      KeyMissing, SnapshotRead, SnapshotParse, SnapshotWrite
//!   Process  ExecutableNotFound, InvalidArguments, SpawnFailed, Interrupted
//!
//! All variants boxed => DwenvError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DwenvError`].
pub type DwenvResult<T> = std::result::Result<T, DwenvError>;

/// Top-level error type of the environment builder.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum DwenvError {
    /// Configuration set or settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Fragment file could not be parsed.
    #[error("fragment error: {0}")]
    Fragment(#[from] Box<FragmentError>),

    /// Starting environment error.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Launching the executable failed.
    #[error("launch error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl DwenvError {
    /// Returns the config error, if this is one.
    #[must_use]
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the fragment error, if this is one.
    #[must_use]
    pub fn as_fragment(&self) -> Option<&FragmentError> {
        match self {
            Self::Fragment(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the environment error, if this is one.
    #[must_use]
    pub fn as_env(&self) -> Option<&EnvError> {
        match self {
            Self::Env(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the process error, if this is one.
    #[must_use]
    pub fn as_process(&self) -> Option<&ProcessError> {
        match self {
            Self::Process(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DwenvError {
                fn from(err: $error) -> Self {
                    DwenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    FragmentError => Fragment,
    EnvError => Env,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Errors locating and reading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A referenced list or fragment file does not exist.
    #[error("config file missing: {0}")]
    NotFound(String),

    /// The configs argument has an unsupported extension.
    #[error("wrong extension for configs path '{path}' (expected .env or .envc)")]
    WrongExtension { path: String },

    /// Failed to read a configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a settings file.
    #[error("failed to parse settings '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

// --- Fragment Errors ---

/// Fragment (`.envc`) parse errors.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The line does not match `NAME OP VALUE`.
    #[error("wrong input in config {path}:{line}: {text}")]
    Syntax {
        path: String,
        line: usize,
        text: String,
    },

    /// The variable part is not `NAME` or `NAME.PLATFORM`.
    #[error("invalid variable name '{name}' in config {path}:{line}: {text}")]
    InvalidName {
        path: String,
        line: usize,
        name: String,
        text: String,
    },
}

impl FragmentError {
    /// Returns the offending line text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Syntax { text, .. } | Self::InvalidName { text, .. } => text,
        }
    }

    /// Attaches the source file to an error produced while parsing text.
    #[must_use]
    pub fn with_path(self, source: impl Into<String>) -> Self {
        let source = source.into();
        match self {
            Self::Syntax { line, text, .. } => Self::Syntax {
                path: source,
                line,
                text,
            },
            Self::InvalidName {
                line, name, text, ..
            } => Self::InvalidName {
                path: source,
                line,
                name,
                text,
            },
        }
    }
}

// --- Environment Errors ---

/// Starting environment errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A required variable is absent.
    #[error("missing required variable '{key}'")]
    KeyMissing { key: String },

    /// Failed to read a start environment snapshot.
    #[error("failed to read start environment '{path}': {source}")]
    SnapshotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Start environment snapshot is not a JSON object of strings.
    #[error("invalid start environment '{path}': {message}")]
    SnapshotParse { path: String, message: String },

    /// Failed to write the start environment backup.
    #[error("failed to write start environment backup '{path}': {source}")]
    SnapshotWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Process Errors ---

/// Launch errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in the built PATH.
    #[error("failed to launch '{command}': executable not found (PATH={path})")]
    ExecutableNotFound { command: String, path: String },

    /// Shell-style argument string could not be split.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting was interrupted by Ctrl+C.
    #[error("process '{0}' was interrupted")]
    Interrupted(String),
}
