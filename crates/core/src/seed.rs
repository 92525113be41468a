// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default household created on first run.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rusqlite::params;
use std::collections::HashMap;

use crate::chore::{ChoreDay, Recurrence};
use crate::db::{format_date_opt, Database};
use crate::error::Result;

/// Starting profiles and balances.
pub const DEFAULT_PROFILES: [(&str, i64); 3] = [("Charles", 100), ("Carys", 50), ("Wynne", 75)];

/// Reward templates offered to every profile.
pub const DEFAULT_REWARDS: [(&str, i64); 3] =
    [("30 mins iPad", 50), ("Pick Dinner", 40), ("Sleepover", 100)];

struct SeedChore {
    owner: &'static str,
    name: &'static str,
    recurrence: Recurrence,
    day: ChoreDay,
    /// Whether the chore starts on the coming Monday with a 14-day cycle.
    fortnightly_from_monday: bool,
    points: i64,
}

const DEFAULT_CHORES: [SeedChore; 3] = [
    SeedChore {
        owner: "Carys",
        name: "Feed the Dogs",
        recurrence: Recurrence::Daily,
        day: ChoreDay::Any,
        fortnightly_from_monday: false,
        points: 10,
    },
    SeedChore {
        owner: "Wynne",
        name: "Feed the Cats",
        recurrence: Recurrence::Daily,
        day: ChoreDay::Any,
        fortnightly_from_monday: false,
        points: 10,
    },
    SeedChore {
        owner: "Charles",
        name: "Take out Recycling",
        recurrence: Recurrence::BiWeekly,
        day: ChoreDay::On(Weekday::Mon),
        fortnightly_from_monday: true,
        points: 20,
    },
];

/// The Monday on or after `today`.
pub fn monday_on_or_after(today: NaiveDate) -> NaiveDate {
    let ahead = (7 - today.weekday().num_days_from_monday()) % 7;
    today
        .checked_add_days(Days::new(u64::from(ahead)))
        .unwrap_or(today)
}

fn table_is_empty(db: &Database, table: &str) -> Result<bool> {
    let count: i64 = db
        .conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(count == 0)
}

impl Database {
    /// Populate empty collections with the default household.
    ///
    /// Each collection is seeded only while it is empty, so calling this on
    /// an existing database changes nothing. Returns `true` if any row was
    /// inserted.
    pub fn seed_defaults(&mut self, today: NaiveDate) -> Result<bool> {
        let mut seeded = false;

        if table_is_empty(self, "profiles")? {
            let tx = self.conn.transaction()?;
            for (name, points) in DEFAULT_PROFILES {
                tx.execute(
                    "INSERT INTO profiles (name, points) VALUES (?1, ?2)",
                    params![name, points],
                )?;
            }
            tx.commit()?;
            seeded = true;
        }

        let profile_ids: HashMap<String, i64> = self
            .list_profiles()?
            .into_iter()
            .map(|p| (p.name, p.id))
            .collect();

        if table_is_empty(self, "chores")? {
            let next_monday = monday_on_or_after(today);
            let tx = self.conn.transaction()?;
            for chore in &DEFAULT_CHORES {
                let Some(profile_id) = profile_ids.get(chore.owner) else {
                    continue;
                };
                let (start, interval) = if chore.fortnightly_from_monday {
                    (Some(next_monday), 14)
                } else {
                    (None, 0)
                };
                tx.execute(
                    "INSERT INTO chores (profile_id, name, recurrence, day, start_date, interval_days, points)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        profile_id,
                        chore.name,
                        chore.recurrence.as_str(),
                        chore.day.as_str(),
                        format_date_opt(start),
                        interval,
                        chore.points,
                    ],
                )?;
            }
            tx.commit()?;
            seeded = true;
        }

        if table_is_empty(self, "rewards")? {
            let mut ids: Vec<i64> = profile_ids.values().copied().collect();
            ids.sort_unstable();
            let tx = self.conn.transaction()?;
            for profile_id in ids {
                for (name, cost) in DEFAULT_REWARDS {
                    tx.execute(
                        "INSERT INTO rewards (profile_id, name, cost) VALUES (?1, ?2, ?3)",
                        params![profile_id, name, cost],
                    )?;
                }
            }
            tx.commit()?;
            seeded = true;
        }

        if seeded {
            tracing::info!("seeded default household");
        }
        Ok(seeded)
    }
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
