// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Household members and their point balances.

use serde::{Deserialize, Serialize};

/// Row identifier of a profile.
pub type ProfileId = i64;

/// A household member tracked by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    /// Current redeemable point balance. Only the ledger writes it.
    pub points: i64,
}
