// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `cq` binary with a clean environment.
pub fn cq() -> Command {
    let mut cmd = cargo_bin_cmd!("cq");
    cmd.env_remove("CQ_DIR")
        .env_remove("CQ_PIN")
        .env_remove("CQ_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Helper to create an initialized temp directory with the sample household
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    cq().arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an initialized temp directory with no sample data
pub fn init_temp_empty() -> TempDir {
    let temp = TempDir::new().unwrap();
    cq().args(["init", "--no-seed"])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Run `cq admin --pin 1234 <args>` in `temp`.
pub fn admin(temp: &TempDir, args: &[&str]) -> assert_cmd::assert::Assert {
    cq().args(["admin", "--pin", "1234"])
        .args(args)
        .current_dir(temp.path())
        .assert()
}

/// Read a profile's balance from `cq profiles -o json`.
pub fn points_of(temp: &TempDir, name: &str) -> i64 {
    let output = cq()
        .args(["profiles", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let profiles: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    profiles
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .and_then(|p| p["points"].as_i64())
        .unwrap()
}
