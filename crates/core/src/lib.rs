// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cq-core: Shared library for the Chore Quest household tracker
//!
//! This crate provides the data model, the SQLite store, the points ledger,
//! and the two approval workflows (chore completion and reward redemption)
//! used by the `cq` CLI.

pub mod chore;
pub mod db;
pub mod error;
pub mod history;
pub mod ledger;
pub mod profile;
pub mod recurrence;
pub mod reward;
pub mod seed;
pub mod stats;
pub mod workflow;

pub use chore::{Chore, ChoreDay, ChoreId, ChoreState, NewChore, Recurrence};
pub use db::Database;
pub use error::{Error, Result};
pub use history::HistoryEntry;
pub use profile::{Profile, ProfileId};
pub use reward::{NewReward, Reward, RewardId, RewardState};
pub use stats::ProfileSummary;
pub use workflow::{PendingChore, PendingReward};
