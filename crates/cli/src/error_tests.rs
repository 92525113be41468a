// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    not_initialized = { Error::NotInitialized, "not initialized: run 'cq init' first" },
    incorrect_pin = { Error::IncorrectPin, "incorrect parent PIN" },
    chore_not_found = { Error::ChoreNotFound(7), "chore not found: 7" },
    insufficient = {
        Error::InsufficientPoints { needed: 100, available: 40 },
        "Not enough points: need 100, have 40"
    },
)]
fn error_display(err: Error, expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn pin_required_has_hint() {
    let msg = Error::PinRequired.to_string();
    assert!(msg.contains("hint:"));
    assert!(msg.contains("CQ_PIN"));
}

#[test]
fn from_core_insufficient_points() {
    let err: Error = cq_core::Error::InsufficientPoints {
        needed: 50,
        available: 10,
    }
    .into();
    assert!(matches!(
        err,
        Error::InsufficientPoints {
            needed: 50,
            available: 10
        }
    ));
}

#[test]
fn from_core_transition_keeps_fields() {
    let err: Error = cq_core::Error::InvalidTransition {
        from: "approved".to_string(),
        to: "approved".to_string(),
        valid_targets: "pending".to_string(),
    }
    .into();
    match err {
        Error::InvalidTransition { from, to, .. } => {
            assert_eq!(from, "approved");
            assert_eq!(to, "approved");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn from_core_validation_becomes_input_error() {
    let err: Error = cq_core::Error::InvalidDay("funday".to_string()).into();
    match err {
        Error::InvalidInput(msg) => assert!(msg.contains("funday")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn from_core_profile_not_found_adds_hint() {
    let err: Error = cq_core::Error::ProfileNotFound("Zed".to_string()).into();
    let msg = err.to_string();
    assert!(msg.starts_with("profile not found: Zed"));
    assert!(msg.contains("cq profiles"));
}
