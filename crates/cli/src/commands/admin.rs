// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parent-only commands. Every handler takes a [`ParentSession`].

use chrono::{Local, NaiveDate};
use cq_core::{
    ChoreDay, ChoreId, Database, NewChore, NewReward, PendingChore, PendingReward, Recurrence,
    RewardId,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{AdminCommand, OutputFormat, ScheduleArgs};
use crate::display::format_pending;
use crate::env;
use crate::error::Result;
use crate::session::ParentSession;

use super::{emit, for_each_id, open_db};

/// JSON output structure for the pending command.
#[derive(Serialize)]
struct PendingJson {
    chores: Vec<PendingChore>,
    rewards: Vec<PendingReward>,
}

pub fn run(pin: Option<String>, command: AdminCommand) -> Result<()> {
    let (mut db, config, _) = open_db()?;
    let pin = pin.or_else(env::pin);
    let session = ParentSession::login(&config, pin.as_deref())?;
    let today = Local::now().date_naive();

    match command {
        AdminCommand::Pending { output } => pending_impl(&db, &session, output.output),
        AdminCommand::ApproveChore { ids } => approve_chores_impl(&mut db, &session, &ids),
        AdminCommand::RejectChore { ids } => reject_chores_impl(&mut db, &session, &ids),
        AdminCommand::ApproveReward { ids } => approve_rewards_impl(&mut db, &session, &ids),
        AdminCommand::RejectReward { ids } => reject_rewards_impl(&mut db, &session, &ids),
        AdminCommand::AddChore {
            profile,
            description,
            points,
            schedule,
        } => {
            let id = add_chore_impl(
                &db,
                &session,
                &profile,
                &description,
                points,
                &schedule,
                today,
            )?;
            println!("Added chore {}", id);
            Ok(())
        }
        AdminCommand::AddReward {
            profile,
            description,
            cost,
        } => {
            let id = add_reward_impl(&db, &session, &profile, &description, cost)?;
            println!("Added reward {}", id);
            Ok(())
        }
        AdminCommand::Renew { date } => {
            let today = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };
            let renewed = renew_impl(&mut db, &session, today)?;
            match renewed.len() {
                0 => println!("No chores due for renewal"),
                n => println!("Renewed {} chore(s)", n),
            }
            Ok(())
        }
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| cq_core::Error::InvalidDate(s.to_string()).into())
}

pub(crate) fn pending_impl(
    db: &Database,
    _session: &ParentSession,
    format: OutputFormat,
) -> Result<()> {
    let pending = PendingJson {
        chores: db.pending_chore_approvals()?,
        rewards: db.pending_reward_approvals()?,
    };
    emit(format, &pending, |p| {
        println!("{}", format_pending(&p.chores, &p.rewards));
    })
}

pub(crate) fn approve_chores_impl(
    db: &mut Database,
    _session: &ParentSession,
    ids: &[ChoreId],
) -> Result<()> {
    for_each_id(ids, |id| {
        let chore = db.approve_chore(id)?;
        let balance = db.get_profile(chore.profile_id)?.points;
        info!(chore = id, points = chore.points, "chore approved");
        println!(
            "Approved {} (+{} pts, balance {})",
            chore.name, chore.points, balance
        );
        Ok(())
    })
}

pub(crate) fn reject_chores_impl(
    db: &mut Database,
    _session: &ParentSession,
    ids: &[ChoreId],
) -> Result<()> {
    for_each_id(ids, |id| {
        let chore = db.reject_chore(id)?;
        info!(chore = id, "chore rejected");
        println!("Rejected {}", chore.name);
        Ok(())
    })
}

pub(crate) fn approve_rewards_impl(
    db: &mut Database,
    _session: &ParentSession,
    ids: &[RewardId],
) -> Result<()> {
    for_each_id(ids, |id| {
        let reward = db.approve_reward(id)?;
        info!(reward = id, "reward approved");
        println!("Approved {}", reward.name);
        Ok(())
    })
}

pub(crate) fn reject_rewards_impl(
    db: &mut Database,
    _session: &ParentSession,
    ids: &[RewardId],
) -> Result<()> {
    for_each_id(ids, |id| {
        let reward = db.reject_reward(id)?;
        info!(reward = id, refund = reward.cost, "reward rejected");
        println!("Rejected {} (refunded {} pts)", reward.name, reward.cost);
        Ok(())
    })
}

/// Build and store a chore. Custom recurrence starts `today` unless a start
/// date is given.
#[allow(clippy::too_many_arguments)]
pub(crate) fn add_chore_impl(
    db: &Database,
    _session: &ParentSession,
    profile: &str,
    description: &str,
    points: i64,
    schedule: &ScheduleArgs,
    today: NaiveDate,
) -> Result<ChoreId> {
    let profile = db.resolve_profile(profile)?;
    let day: ChoreDay = schedule.day.parse()?;
    let recurrence: Recurrence = schedule.recurrence.parse()?;

    let mut chore = NewChore::new(profile.id, description, points).with_schedule(day, recurrence);
    if recurrence == Recurrence::Custom {
        let start = match &schedule.start {
            Some(s) => parse_date(s)?,
            None => today,
        };
        chore = chore.with_interval(start, schedule.every);
    }

    let id = db.create_chore(chore)?;
    info!(chore = id, profile = %profile.name, "chore added");
    Ok(id)
}

pub(crate) fn add_reward_impl(
    db: &Database,
    _session: &ParentSession,
    profile: &str,
    description: &str,
    cost: i64,
) -> Result<RewardId> {
    let profile = db.resolve_profile(profile)?;
    let id = db.create_reward(NewReward::new(profile.id, description, cost))?;
    info!(reward = id, profile = %profile.name, "reward added");
    Ok(id)
}

pub(crate) fn renew_impl(
    db: &mut Database,
    _session: &ParentSession,
    today: NaiveDate,
) -> Result<Vec<ChoreId>> {
    Ok(db.renew_due_chores(today)?)
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
