// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::CQ_DIR, "CQ_DIR");
    assert_eq!(vars::CQ_PIN, "CQ_PIN");
    assert_eq!(vars::CQ_LOG, "CQ_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_work_dir_set_and_empty() {
    std::env::set_var("CQ_DIR", "/tmp/house/.chorequest");
    assert_eq!(work_dir(), Some(PathBuf::from("/tmp/house/.chorequest")));
    std::env::set_var("CQ_DIR", "");
    assert_eq!(work_dir(), None);
    std::env::remove_var("CQ_DIR");
    assert_eq!(work_dir(), None);
}

#[test]
fn test_pin() {
    std::env::set_var("CQ_PIN", "4321");
    assert_eq!(pin().as_deref(), Some("4321"));
    std::env::remove_var("CQ_PIN");
    assert!(pin().is_none());
}

#[test]
fn test_log_filter_prefers_cq_log() {
    std::env::set_var("CQ_LOG", "cq_core=debug");
    assert_eq!(log_filter().as_deref(), Some("cq_core=debug"));
    std::env::remove_var("CQ_LOG");
}
