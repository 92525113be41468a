// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chore completion and reward redemption workflows.
//!
//! Each transition runs in its own transaction. The UPDATE statements repeat
//! the state guard in their WHERE clause, so a transition that lost a race
//! changes no rows and is rolled back instead of applying twice.
//!
//! Points are credited for chores only when a parent approves, while reward
//! costs are debited as soon as the child claims and refunded on rejection.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::chore::{Chore, ChoreId, ChoreState};
use crate::db::{chore_from_row, reward_from_row, Database, CHORE_COLUMNS, REWARD_COLUMNS};
use crate::error::{Error, Result};
use crate::ledger;
use crate::profile::ProfileId;
use crate::reward::{Reward, RewardId, RewardState};

/// A completed chore waiting for a parent's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChore {
    pub chore_id: ChoreId,
    pub profile_id: ProfileId,
    pub profile_name: String,
    pub chore_name: String,
    pub points: i64,
}

/// A claimed reward waiting for a parent's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReward {
    pub reward_id: RewardId,
    pub profile_id: ProfileId,
    pub profile_name: String,
    pub reward_name: String,
    pub cost: i64,
}

fn fetch_chore(conn: &Connection, id: ChoreId) -> Result<Chore> {
    conn.query_row(
        &format!("SELECT {CHORE_COLUMNS} FROM chores WHERE id = ?1"),
        params![id],
        chore_from_row,
    )
    .optional()?
    .ok_or(Error::ChoreNotFound(id))
}

fn fetch_reward(conn: &Connection, id: RewardId) -> Result<Reward> {
    conn.query_row(
        &format!("SELECT {REWARD_COLUMNS} FROM rewards WHERE id = ?1"),
        params![id],
        reward_from_row,
    )
    .optional()?
    .ok_or(Error::RewardNotFound(id))
}

fn chore_transition(from: ChoreState, to: ChoreState) -> Error {
    tracing::debug!(from = %from, to = %to, "refused chore transition");
    Error::InvalidTransition {
        from: from.to_string(),
        to: to.to_string(),
        valid_targets: from.valid_targets(),
    }
}

fn reward_transition(from: RewardState, to: RewardState) -> Error {
    tracing::debug!(from = %from, to = %to, "refused reward transition");
    Error::InvalidTransition {
        from: from.to_string(),
        to: to.to_string(),
        valid_targets: from.valid_targets(),
    }
}

impl Database {
    /// Mark a pending chore as done, stamped with the current time.
    pub fn complete_chore(&mut self, id: ChoreId) -> Result<Chore> {
        self.complete_chore_at(id, Utc::now())
    }

    /// Mark a pending chore as done and append a history entry.
    ///
    /// The history entry is permanent: rejecting the completion later does
    /// not remove it.
    pub fn complete_chore_at(&mut self, id: ChoreId, at: DateTime<Utc>) -> Result<Chore> {
        let tx = self.conn.transaction()?;
        let chore = fetch_chore(&tx, id)?;
        if chore.state() != ChoreState::Pending {
            return Err(chore_transition(
                chore.state(),
                ChoreState::AwaitingApproval,
            ));
        }

        tx.execute(
            "INSERT INTO chore_history (profile_id, chore_name, completed_at, points)
             VALUES (?1, ?2, ?3, ?4)",
            params![chore.profile_id, chore.name, at.to_rfc3339(), chore.points],
        )?;
        let affected = tx.execute(
            "UPDATE chores SET is_completed = 1 WHERE id = ?1 AND is_completed = 0",
            params![id],
        )?;
        if affected != 1 {
            return Err(chore_transition(
                chore.state(),
                ChoreState::AwaitingApproval,
            ));
        }

        let updated = fetch_chore(&tx, id)?;
        tx.commit()?;
        tracing::info!(chore_id = id, profile_id = chore.profile_id, "chore completed");
        Ok(updated)
    }

    /// Approve a completed chore and credit its points to the owner.
    ///
    /// Only a chore awaiting approval can be approved, so a repeated approval
    /// is refused and never credits twice.
    pub fn approve_chore(&mut self, id: ChoreId) -> Result<Chore> {
        let tx = self.conn.transaction()?;
        let chore = fetch_chore(&tx, id)?;
        if chore.state() != ChoreState::AwaitingApproval {
            return Err(chore_transition(chore.state(), ChoreState::Approved));
        }

        let affected = tx.execute(
            "UPDATE chores SET is_approved = 1, approved_at = ?1
             WHERE id = ?2 AND is_completed = 1 AND is_approved = 0",
            params![Utc::now().to_rfc3339(), id],
        )?;
        if affected != 1 {
            return Err(chore_transition(chore.state(), ChoreState::Approved));
        }
        ledger::credit(&tx, chore.profile_id, chore.points)?;

        let updated = fetch_chore(&tx, id)?;
        tx.commit()?;
        tracing::info!(
            chore_id = id,
            profile_id = chore.profile_id,
            points = chore.points,
            "chore approved"
        );
        Ok(updated)
    }

    /// Send a completed chore back to pending without paying out.
    pub fn reject_chore(&mut self, id: ChoreId) -> Result<Chore> {
        let tx = self.conn.transaction()?;
        let chore = fetch_chore(&tx, id)?;
        if chore.state() != ChoreState::AwaitingApproval {
            return Err(chore_transition(chore.state(), ChoreState::Pending));
        }

        let affected = tx.execute(
            "UPDATE chores SET is_completed = 0
             WHERE id = ?1 AND is_completed = 1 AND is_approved = 0",
            params![id],
        )?;
        if affected != 1 {
            return Err(chore_transition(chore.state(), ChoreState::Pending));
        }

        let updated = fetch_chore(&tx, id)?;
        tx.commit()?;
        tracing::info!(chore_id = id, profile_id = chore.profile_id, "chore rejected");
        Ok(updated)
    }

    /// Claim an available reward, debiting its cost from the owner.
    ///
    /// Fails with [`Error::InsufficientPoints`] and leaves everything
    /// unchanged when the balance does not cover the cost.
    pub fn claim_reward(&mut self, id: RewardId) -> Result<Reward> {
        let tx = self.conn.transaction()?;
        let reward = fetch_reward(&tx, id)?;
        if reward.state() != RewardState::Available {
            return Err(reward_transition(reward.state(), RewardState::Claimed));
        }

        if !ledger::debit_if_sufficient(&tx, reward.profile_id, reward.cost)? {
            let available = ledger::balance(&tx, reward.profile_id)?;
            tracing::info!(
                reward_id = id,
                profile_id = reward.profile_id,
                cost = reward.cost,
                available,
                "claim refused: not enough points"
            );
            return Err(Error::InsufficientPoints {
                needed: reward.cost,
                available,
            });
        }

        let affected = tx.execute(
            "UPDATE rewards SET is_claimed = 1 WHERE id = ?1 AND is_claimed = 0",
            params![id],
        )?;
        if affected != 1 {
            return Err(reward_transition(reward.state(), RewardState::Claimed));
        }

        let updated = fetch_reward(&tx, id)?;
        tx.commit()?;
        tracing::info!(
            reward_id = id,
            profile_id = reward.profile_id,
            cost = reward.cost,
            "reward claimed"
        );
        Ok(updated)
    }

    /// Approve a claimed reward. The cost was already debited at claim time.
    pub fn approve_reward(&mut self, id: RewardId) -> Result<Reward> {
        let tx = self.conn.transaction()?;
        let reward = fetch_reward(&tx, id)?;
        if reward.state() != RewardState::Claimed {
            return Err(reward_transition(reward.state(), RewardState::Approved));
        }

        let affected = tx.execute(
            "UPDATE rewards SET is_approved = 1
             WHERE id = ?1 AND is_claimed = 1 AND is_approved = 0",
            params![id],
        )?;
        if affected != 1 {
            return Err(reward_transition(reward.state(), RewardState::Approved));
        }

        let updated = fetch_reward(&tx, id)?;
        tx.commit()?;
        tracing::info!(reward_id = id, profile_id = reward.profile_id, "reward approved");
        Ok(updated)
    }

    /// Reject a claimed reward, making it available again and refunding the cost.
    pub fn reject_reward(&mut self, id: RewardId) -> Result<Reward> {
        let tx = self.conn.transaction()?;
        let reward = fetch_reward(&tx, id)?;
        if reward.state() != RewardState::Claimed {
            return Err(reward_transition(reward.state(), RewardState::Available));
        }

        let affected = tx.execute(
            "UPDATE rewards SET is_claimed = 0
             WHERE id = ?1 AND is_claimed = 1 AND is_approved = 0",
            params![id],
        )?;
        if affected != 1 {
            return Err(reward_transition(reward.state(), RewardState::Available));
        }
        ledger::refund(&tx, reward.profile_id, reward.cost)?;

        let updated = fetch_reward(&tx, id)?;
        tx.commit()?;
        tracing::info!(
            reward_id = id,
            profile_id = reward.profile_id,
            cost = reward.cost,
            "reward rejected, cost refunded"
        );
        Ok(updated)
    }

    /// Completed chores waiting for approval, across all profiles.
    pub fn pending_chore_approvals(&self) -> Result<Vec<PendingChore>> {
        let mut stmt = self.conn.prepare(
            "SELECT chores.id, profiles.id, profiles.name, chores.name, chores.points
             FROM chores JOIN profiles ON chores.profile_id = profiles.id
             WHERE chores.is_completed = 1 AND chores.is_approved = 0
             ORDER BY chores.id",
        )?;
        let pending = stmt
            .query_map([], |row| {
                Ok(PendingChore {
                    chore_id: row.get(0)?,
                    profile_id: row.get(1)?,
                    profile_name: row.get(2)?,
                    chore_name: row.get(3)?,
                    points: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(pending)
    }

    /// Claimed rewards waiting for approval, across all profiles.
    pub fn pending_reward_approvals(&self) -> Result<Vec<PendingReward>> {
        let mut stmt = self.conn.prepare(
            "SELECT rewards.id, profiles.id, profiles.name, rewards.name, rewards.cost
             FROM rewards JOIN profiles ON rewards.profile_id = profiles.id
             WHERE rewards.is_claimed = 1 AND rewards.is_approved = 0
             ORDER BY rewards.id",
        )?;
        let pending = stmt
            .query_map([], |row| {
                Ok(PendingReward {
                    reward_id: row.get(0)?,
                    profile_id: row.get(1)?,
                    profile_name: row.get(2)?,
                    reward_name: row.get(3)?,
                    cost: row.get(4)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(pending)
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
