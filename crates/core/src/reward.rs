// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewards and their redemption state.
//!
//! A reward moves `available -> claimed -> approved`, and a parent may send a
//! claim back to `available`, refunding the cost.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::profile::ProfileId;

/// Row identifier of a reward.
pub type RewardId = i64;

/// Where a reward sits in the redemption workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardState {
    /// Can be claimed if the balance covers the cost.
    Available,
    /// Paid for, waiting for a parent.
    Claimed,
    /// Granted.
    Approved,
}

impl RewardState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardState::Available => "available",
            RewardState::Claimed => "claimed",
            RewardState::Approved => "approved",
        }
    }

    /// Derive the state from the stored flags.
    pub fn from_flags(claimed: bool, approved: bool) -> Self {
        match (claimed, approved) {
            (_, true) => RewardState::Approved,
            (true, false) => RewardState::Claimed,
            (false, false) => RewardState::Available,
        }
    }

    pub fn valid_targets(&self) -> String {
        match self {
            RewardState::Available => "claimed (claim)".to_string(),
            RewardState::Claimed => "approved (approve), available (reject)".to_string(),
            RewardState::Approved => "none".to_string(),
        }
    }
}

impl fmt::Display for RewardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A redeemable item offered to one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: RewardId,
    pub profile_id: ProfileId,
    pub name: String,
    /// Points debited when the reward is claimed.
    pub cost: i64,
    pub claimed: bool,
    pub approved: bool,
}

impl Reward {
    pub fn state(&self) -> RewardState {
        RewardState::from_flags(self.claimed, self.approved)
    }
}

/// Fields for a reward created by a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReward {
    pub profile_id: ProfileId,
    pub name: String,
    pub cost: i64,
}

impl NewReward {
    pub fn new(profile_id: ProfileId, name: impl Into<String>, cost: i64) -> Self {
        NewReward {
            profile_id,
            name: name.into(),
            cost,
        }
    }

    /// Check the fields and return the normalized definition to store.
    pub fn validate(self) -> Result<NewReward> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::FieldEmpty {
                field: "Reward name",
            });
        }
        if self.cost < 1 {
            return Err(Error::ValueTooSmall {
                field: "Cost",
                min: 1,
                actual: self.cost,
            });
        }
        Ok(NewReward { name, ..self })
    }
}

#[cfg(test)]
#[path = "reward_tests.rs"]
mod tests;
