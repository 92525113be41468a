// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cq_core::{Database, RewardId};
use tracing::info;

use crate::error::Result;

use super::{for_each_id, open_db};

pub fn done(ids: &[i64]) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    done_impl(&mut db, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn done_impl(db: &mut Database, ids: &[i64]) -> Result<()> {
    for_each_id(ids, |id| {
        let chore = db.complete_chore(id)?;
        info!(chore = id, "chore completed");
        println!(
            "Done: {} ({} pts once a parent approves)",
            chore.name, chore.points
        );
        Ok(())
    })
}

pub fn claim(id: RewardId) -> Result<()> {
    let (mut db, _, _) = open_db()?;
    claim_impl(&mut db, id)
}

pub(crate) fn claim_impl(db: &mut Database, id: RewardId) -> Result<()> {
    let reward = db.claim_reward(id)?;
    info!(reward = id, cost = reward.cost, "reward claimed");

    let balance = db.get_profile(reward.profile_id)?.points;
    println!(
        "Claimed {} for {} pts ({} pts left)",
        reward.name, reward.cost, balance
    );
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
