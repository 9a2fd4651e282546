// dwenv-rs: Layered Environment Launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd::launch
//!                |                     |
//!                v                     |
//!   config (dwenv.toml, --settings)    |
//!                                      v
//!              ,---------------------------------,
//!              |            builder              |
//!              |  StartEnv --> EnvBuilder fold   |
//!              '----+-------------+----------+---'
//!                   |             |          |
//!                   v             v          v
//!                configs       fragment    core::env
//!              .env / .envc   NAME OP VAL  Env, Platform
//!              path expansion
//!
//!   +-----------------------------------------+
//!   |  core::process   launch in built env    |
//!   +-----------------------------------------+
//!   |  foundation      error, logging         |
//!   +-----------------------------------------+
//! ```

pub mod builder;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod configs;
pub mod core;
pub mod error;
pub mod fragment;
pub mod logging;
