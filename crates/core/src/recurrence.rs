// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renewal of recurring chores.
//!
//! An approved chore stays approved until its next occurrence arrives.
//! [`Database::renew_due_chores`] resets such chores to pending; nothing
//! runs it automatically.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use rusqlite::params;

use crate::chore::{Chore, ChoreId, Recurrence};
use crate::db::Database;
use crate::error::Result;

/// The first date after `approved_on` on which the chore is due again.
///
/// Returns `None` for a chore that never recurs (custom with no interval).
pub fn next_occurrence(chore: &Chore, approved_on: NaiveDate) -> Option<NaiveDate> {
    if chore.recurrence == Recurrence::Monthly {
        return approved_on.checked_add_months(Months::new(1));
    }

    let period = chore.recurrence.period_days(chore.interval_days)?;

    if let Some(start) = chore.start_date {
        return next_on_cycle(start, period, approved_on);
    }

    if let (Some(weekday), Recurrence::Weekly | Recurrence::BiWeekly) =
        (chore.day.weekday(), chore.recurrence)
    {
        let after = approved_on.checked_add_days(Days::new(u64::from(period - 7)))?;
        return next_weekday_after(after, weekday);
    }

    approved_on.checked_add_days(Days::new(u64::from(period)))
}

/// First `start + k * period` (k >= 0) strictly after `after`.
fn next_on_cycle(start: NaiveDate, period: u32, after: NaiveDate) -> Option<NaiveDate> {
    if start > after {
        return Some(start);
    }
    let elapsed = u64::try_from((after - start).num_days()).ok()?;
    let period = u64::from(period);
    let cycles = elapsed / period + 1;
    start.checked_add_days(Days::new(cycles * period))
}

fn next_weekday_after(after: NaiveDate, weekday: chrono::Weekday) -> Option<NaiveDate> {
    let current = after.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let ahead = (target + 7 - current) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    after.checked_add_days(Days::new(u64::from(ahead)))
}

/// Whether an approved chore should return to pending on `today`.
///
/// `today` is a local calendar date, so the approval day is taken in local
/// time too.
pub fn is_due(chore: &Chore, today: NaiveDate) -> bool {
    let Some(approved_at) = chore.approved_at else {
        return false;
    };
    let approved_on = approved_at.with_timezone(&Local).date_naive();
    next_occurrence(chore, approved_on).is_some_and(|next| next <= today)
}

impl Database {
    /// Reset every approved chore whose next occurrence is on or before
    /// `today`, returning the IDs that were renewed.
    ///
    /// History is left untouched and no points move.
    pub fn renew_due_chores(&mut self, today: NaiveDate) -> Result<Vec<ChoreId>> {
        let due: Vec<ChoreId> = self
            .list_approved_chores()?
            .into_iter()
            .filter(|chore| is_due(chore, today))
            .map(|chore| chore.id)
            .collect();

        let tx = self.conn.transaction()?;
        for id in &due {
            tx.execute(
                "UPDATE chores SET is_completed = 0, is_approved = 0, approved_at = NULL
                 WHERE id = ?1 AND is_approved = 1",
                params![id],
            )?;
        }
        tx.commit()?;

        if !due.is_empty() {
            tracing::info!(count = due.len(), %today, "renewed recurring chores");
        }
        Ok(due)
    }
}

#[cfg(test)]
#[path = "recurrence_tests.rs"]
mod tests;
