// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `CQ_DIR` if set: an explicit `.chorequest/` directory.
pub fn work_dir() -> Option<PathBuf> {
    std::env::var(vars::CQ_DIR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns the parent PIN from `CQ_PIN` if set.
pub fn pin() -> Option<String> {
    std::env::var(vars::CQ_PIN).ok()
}

/// Returns the log filter directive from `CQ_LOG`, falling back to `RUST_LOG`.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::CQ_LOG)
        .or_else(|_| std::env::var(vars::RUST_LOG))
        .ok()
        .filter(|v| !v.is_empty())
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
