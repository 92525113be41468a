// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-profile figures shown on the board.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::chore::{Chore, ChoreState};
use crate::db::Database;
use crate::error::Result;
use crate::profile::{Profile, ProfileId};
use crate::reward::{Reward, RewardState};

/// Points needed to fill one XP bar.
pub const XP_PER_LEVEL: i64 = 100;

/// Progress toward the next hundred points.
pub fn xp(points: i64) -> i64 {
    points.rem_euclid(XP_PER_LEVEL)
}

/// Everything the board shows for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub profile: Profile,
    pub xp: i64,
    /// Distinct days with at least one completed chore.
    pub active_days: usize,
    /// Chores that can still be marked done.
    pub open_chores: Vec<Chore>,
    /// Rewards that can still be claimed.
    pub available_rewards: Vec<Reward>,
}

impl Database {
    /// Number of distinct local calendar days on which the profile completed
    /// a chore.
    pub fn active_days(&self, profile_id: ProfileId) -> Result<usize> {
        let days: BTreeSet<_> = self
            .history_timestamps(profile_id)?
            .into_iter()
            .map(|ts| ts.with_timezone(&Local).date_naive())
            .collect();
        Ok(days.len())
    }

    /// Build the board summary for a profile.
    pub fn profile_summary(&self, profile_id: ProfileId) -> Result<ProfileSummary> {
        let profile = self.get_profile(profile_id)?;
        let open_chores = self
            .list_chores(profile_id)?
            .into_iter()
            .filter(|c| c.state() == ChoreState::Pending)
            .collect();
        let available_rewards = self
            .list_rewards(profile_id)?
            .into_iter()
            .filter(|r| r.state() == RewardState::Available)
            .collect();

        Ok(ProfileSummary {
            xp: xp(profile.points),
            active_days: self.active_days(profile_id)?,
            profile,
            open_chores,
            available_rewards,
        })
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
