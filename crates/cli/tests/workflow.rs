// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

// Seeded ids: chore 1 is Carys's "Feed the Dogs" (10 pts); rewards 4-6 are
// Carys's "30 mins iPad" (50), "Pick Dinner" (40) and "Sleepover" (100).

#[test]
fn board_shows_every_profile() {
    let temp = init_temp();

    cq().arg("board")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Charles: 100 pts"))
        .stdout(predicate::str::contains("Carys: 50 pts (XP 50/100, 0 active days)"))
        .stdout(predicate::str::contains("Wynne: 75 pts"))
        .stdout(predicate::str::contains("Feed the Dogs"));
}

#[test]
fn board_json_is_parseable() {
    let temp = init_temp();

    let output = cq()
        .args(["board", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let board = board.as_array().unwrap();
    assert_eq!(board.len(), 3);
    assert_eq!(board[1]["profile"]["name"], "Carys");
    assert_eq!(board[1]["xp"], 50);
}

#[test]
fn done_then_approve_credits_points() {
    let temp = init_temp();

    cq().args(["done", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done: Feed the Dogs"));
    assert_eq!(points_of(&temp, "Carys"), 50);

    cq().args(["chores", "Carys"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("awaiting_approval"));

    admin(&temp, &["approve-chore", "1"])
        .success()
        .stdout(predicate::str::contains("+10 pts"));
    assert_eq!(points_of(&temp, "Carys"), 60);

    admin(&temp, &["approve-chore", "1"]).failure();
    assert_eq!(points_of(&temp, "Carys"), 60);
}

#[test]
fn rejected_chore_keeps_history() {
    let temp = init_temp();

    cq().args(["done", "1"]).current_dir(temp.path()).assert().success();
    admin(&temp, &["reject-chore", "1"]).success();

    assert_eq!(points_of(&temp, "Carys"), 50);
    cq().args(["history", "Carys"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Feed the Dogs  +10"));
    cq().args(["chores", "Carys"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));
}

#[test]
fn claim_then_approve_reward() {
    let temp = init_temp();

    cq().args(["claim", "5"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Claimed Pick Dinner for 40 pts (10 pts left)"));

    admin(&temp, &["approve-reward", "5"]).success();
    assert_eq!(points_of(&temp, "Carys"), 10);
}

#[test]
fn claim_without_enough_points_fails() {
    let temp = init_temp();

    cq().args(["claim", "6"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough points"));

    assert_eq!(points_of(&temp, "Carys"), 50);
    cq().args(["rewards", "Carys"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sleepover (100 pts) available"));
}

#[test]
fn rejected_claim_is_refunded() {
    let temp = init_temp();

    cq().args(["claim", "5"]).current_dir(temp.path()).assert().success();
    admin(&temp, &["reject-reward", "5"])
        .success()
        .stdout(predicate::str::contains("refunded 40 pts"));

    assert_eq!(points_of(&temp, "Carys"), 50);
}

#[test]
fn second_claim_of_same_reward_fails() {
    let temp = init_temp();

    cq().args(["claim", "5"]).current_dir(temp.path()).assert().success();
    cq().args(["claim", "5"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transition"));
    assert_eq!(points_of(&temp, "Carys"), 10);
}

#[test]
fn unknown_profile_has_hint() {
    let temp = init_temp();

    cq().args(["chores", "Bob"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found: Bob"))
        .stderr(predicate::str::contains("cq profiles"));
}
