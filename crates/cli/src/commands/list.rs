// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cq_core::{Chore, ChoreState, Database, HistoryEntry, Reward, RewardState};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_chore_line, format_history_line, format_reward_line};
use crate::error::Result;

use super::{emit, open_db};

pub fn chores(profile: &str, all: bool, format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    chores_impl(&db, profile, all, format)
}

/// A profile's chores; without `all`, approved chores are left out.
pub(crate) fn visible_chores(db: &Database, profile: &str, all: bool) -> Result<Vec<Chore>> {
    let profile = db.resolve_profile(profile)?;
    Ok(db
        .list_chores(profile.id)?
        .into_iter()
        .filter(|c| all || c.state() != ChoreState::Approved)
        .collect())
}

pub(crate) fn chores_impl(
    db: &Database,
    profile: &str,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let chores = visible_chores(db, profile, all)?;
    emit(format, &chores, |chores| {
        if chores.is_empty() {
            println!("No chores");
        }
        for c in chores {
            println!("{}", format_chore_line(c));
        }
    })
}

pub fn rewards(profile: &str, all: bool, format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    rewards_impl(&db, profile, all, format)
}

/// A profile's rewards; without `all`, only claimable ones.
pub(crate) fn visible_rewards(db: &Database, profile: &str, all: bool) -> Result<Vec<Reward>> {
    let profile = db.resolve_profile(profile)?;
    Ok(db
        .list_rewards(profile.id)?
        .into_iter()
        .filter(|r| all || r.state() == RewardState::Available)
        .collect())
}

pub(crate) fn rewards_impl(
    db: &Database,
    profile: &str,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let rewards = visible_rewards(db, profile, all)?;
    emit(format, &rewards, |rewards| {
        if rewards.is_empty() {
            println!("No rewards");
        }
        for r in rewards {
            println!("{}", format_reward_line(r));
        }
    })
}

pub fn history(profile: &str, limit: Option<usize>, format: OutputFormat) -> Result<()> {
    let (db, config, _) = open_db()?;
    history_impl(&db, &config, profile, limit, format)
}

pub(crate) fn recent_history(
    db: &Database,
    config: &Config,
    profile: &str,
    limit: Option<usize>,
) -> Result<Vec<HistoryEntry>> {
    let profile = db.resolve_profile(profile)?;
    let limit = limit.unwrap_or(config.history_limit);
    Ok(db.list_history(profile.id, limit)?)
}

pub(crate) fn history_impl(
    db: &Database,
    config: &Config,
    profile: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let entries = recent_history(db, config, profile, limit)?;
    emit(format, &entries, |entries| {
        if entries.is_empty() {
            println!("No completed chores yet");
        }
        for e in entries {
            println!("{}", format_history_line(e));
        }
    })
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
