// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for the household board.
//!
//! The [`Database`] struct provides data access for profiles, chores,
//! rewards, and completion history. Workflow transitions live in
//! [`crate::workflow`] and balance changes in [`crate::ledger`].

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::chore::{Chore, ChoreId, NewChore};
use crate::error::{Error, Result};
use crate::history::HistoryEntry;
use crate::profile::{Profile, ProfileId};
use crate::reward::{NewReward, Reward, RewardId};

/// SQL schema for the chore tracker database.
pub const SCHEMA: &str = r#"
-- Household members and their point balances
CREATE TABLE IF NOT EXISTS profiles (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    points INTEGER NOT NULL DEFAULT 0
);

-- Chore definitions with workflow flags and recurrence metadata
CREATE TABLE IF NOT EXISTS chores (
    id INTEGER PRIMARY KEY,
    profile_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0,
    is_approved INTEGER NOT NULL DEFAULT 0,
    points INTEGER NOT NULL DEFAULT 10,
    day TEXT NOT NULL DEFAULT 'Any',
    recurrence TEXT NOT NULL DEFAULT 'Daily',
    start_date TEXT NOT NULL DEFAULT '',
    interval_days INTEGER NOT NULL DEFAULT 0,
    approved_at TEXT,
    FOREIGN KEY (profile_id) REFERENCES profiles(id),
    CHECK (is_approved = 0 OR is_completed = 1)
);

-- Rewards with redemption flags
CREATE TABLE IF NOT EXISTS rewards (
    id INTEGER PRIMARY KEY,
    profile_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    cost INTEGER NOT NULL,
    is_claimed INTEGER NOT NULL DEFAULT 0,
    is_approved INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (profile_id) REFERENCES profiles(id),
    CHECK (is_approved = 0 OR is_claimed = 1)
);

-- Completion log (append-only)
CREATE TABLE IF NOT EXISTS chore_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    profile_id INTEGER NOT NULL,
    chore_name TEXT NOT NULL,
    completed_at TEXT NOT NULL,
    points INTEGER NOT NULL,
    FOREIGN KEY (profile_id) REFERENCES profiles(id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_chores_profile ON chores(profile_id);
CREATE INDEX IF NOT EXISTS idx_rewards_profile ON rewards(profile_id);
CREATE INDEX IF NOT EXISTS idx_history_profile ON chore_history(profile_id, completed_at DESC);
"#;

pub(crate) const CHORE_COLUMNS: &str = "id, profile_id, name, is_completed, is_approved, points,
    day, recurrence, start_date, interval_days, approved_at";

pub(crate) const REWARD_COLUMNS: &str = "id, profile_id, name, cost, is_claimed, is_approved";

fn conversion_error(message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(Error::CorruptedData(message)),
    )
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value
        .parse()
        .map_err(|_| conversion_error(format!("invalid value '{value}' in column '{column}'")))
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(format!("invalid timestamp '{value}' in column '{column}'")))
}

/// Parse an optional `YYYY-MM-DD` date. The empty string means no date.
fn parse_date_opt(
    value: &str,
    column: &str,
) -> std::result::Result<Option<NaiveDate>, rusqlite::Error> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| conversion_error(format!("invalid date '{value}' in column '{column}'")))
}

pub(crate) fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub(crate) fn profile_from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        name: row.get(1)?,
        points: row.get(2)?,
    })
}

/// Map a row selected with [`CHORE_COLUMNS`].
pub(crate) fn chore_from_row(row: &Row<'_>) -> rusqlite::Result<Chore> {
    let day: String = row.get(6)?;
    let recurrence: String = row.get(7)?;
    let start_date: String = row.get(8)?;
    let interval_days: i64 = row.get(9)?;
    let approved_at: Option<String> = row.get(10)?;

    Ok(Chore {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        name: row.get(2)?,
        completed: row.get(3)?,
        approved: row.get(4)?,
        points: row.get(5)?,
        day: parse_db(&day, "day")?,
        recurrence: parse_db(&recurrence, "recurrence")?,
        start_date: parse_date_opt(&start_date, "start_date")?,
        interval_days: u32::try_from(interval_days).map_err(|_| {
            conversion_error(format!("invalid interval '{interval_days}' in column 'interval_days'"))
        })?,
        approved_at: approved_at
            .map(|s| parse_timestamp(&s, "approved_at"))
            .transpose()?,
    })
}

/// Map a row selected with [`REWARD_COLUMNS`].
pub(crate) fn reward_from_row(row: &Row<'_>) -> rusqlite::Result<Reward> {
    Ok(Reward {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        name: row.get(2)?,
        cost: row.get(3)?,
        claimed: row.get(4)?,
        approved: row.get(5)?,
    })
}

fn history_from_row(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
    let completed_at: String = row.get(3)?;
    Ok(HistoryEntry {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        chore_name: row.get(2)?,
        completed_at: parse_timestamp(&completed_at, "completed_at")?,
        points: row.get(4)?,
    })
}

/// Run schema creation and all migrations on a database connection.
///
/// Applies the canonical schema and runs idempotent migrations to upgrade
/// databases created before a column existed.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_approved_at(conn)?;
    Ok(())
}

/// Migration: Add approved_at column used by recurrence renewal.
fn migrate_add_approved_at(conn: &Connection) -> Result<()> {
    let has_column: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('chores') WHERE name = 'approved_at'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !has_column {
        conn.execute("ALTER TABLE chores ADD COLUMN approved_at TEXT", [])?;
    }
    Ok(())
}

/// SQLite database connection with chore tracker operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        tracing::debug!(path = %path.display(), "opened database");
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Insert a profile with a starting balance.
    pub fn create_profile(&self, name: &str, points: i64) -> Result<ProfileId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::FieldEmpty {
                field: "Profile name",
            });
        }
        self.conn.execute(
            "INSERT INTO profiles (name, points) VALUES (?1, ?2)",
            params![name, points],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List all profiles in creation order.
    pub fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, points FROM profiles ORDER BY id")?;
        let profiles = stmt
            .query_map([], profile_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(profiles)
    }

    /// Get a profile by ID.
    pub fn get_profile(&self, id: ProfileId) -> Result<Profile> {
        self.conn
            .query_row(
                "SELECT id, name, points FROM profiles WHERE id = ?1",
                params![id],
                profile_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::ProfileNotFound(id.to_string()))
    }

    /// Resolve a profile from a numeric ID or a case-insensitive name.
    pub fn resolve_profile(&self, name_or_id: &str) -> Result<Profile> {
        let needle = name_or_id.trim();
        if let Ok(id) = needle.parse::<ProfileId>() {
            if let Some(profile) = self
                .conn
                .query_row(
                    "SELECT id, name, points FROM profiles WHERE id = ?1",
                    params![id],
                    profile_from_row,
                )
                .optional()?
            {
                return Ok(profile);
            }
        }

        self.conn
            .query_row(
                "SELECT id, name, points FROM profiles
                 WHERE name = ?1 COLLATE NOCASE ORDER BY id LIMIT 1",
                params![needle],
                profile_from_row,
            )
            .optional()?
            .ok_or_else(|| Error::ProfileNotFound(name_or_id.to_string()))
    }

    /// Check if a profile exists.
    pub fn profile_exists(&self, id: ProfileId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM profiles WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Create a chore from a parent-supplied definition.
    pub fn create_chore(&self, chore: NewChore) -> Result<ChoreId> {
        let chore = chore.validate()?;
        if !self.profile_exists(chore.profile_id)? {
            return Err(Error::ProfileNotFound(chore.profile_id.to_string()));
        }

        self.conn.execute(
            "INSERT INTO chores (profile_id, name, points, day, recurrence, start_date, interval_days)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                chore.profile_id,
                chore.name,
                chore.points,
                chore.day.as_str(),
                chore.recurrence.as_str(),
                format_date_opt(chore.start_date),
                chore.interval_days,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(chore_id = id, profile_id = chore.profile_id, name = %chore.name, "created chore");
        Ok(id)
    }

    /// Get a chore by ID.
    pub fn get_chore(&self, id: ChoreId) -> Result<Chore> {
        self.conn
            .query_row(
                &format!("SELECT {CHORE_COLUMNS} FROM chores WHERE id = ?1"),
                params![id],
                chore_from_row,
            )
            .optional()?
            .ok_or(Error::ChoreNotFound(id))
    }

    /// List the chores assigned to a profile.
    pub fn list_chores(&self, profile_id: ProfileId) -> Result<Vec<Chore>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHORE_COLUMNS} FROM chores WHERE profile_id = ?1 ORDER BY id"
        ))?;
        let chores = stmt
            .query_map(params![profile_id], chore_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(chores)
    }

    /// List every approved chore (candidates for renewal).
    pub fn list_approved_chores(&self) -> Result<Vec<Chore>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHORE_COLUMNS} FROM chores WHERE is_approved = 1 ORDER BY id"
        ))?;
        let chores = stmt
            .query_map([], chore_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(chores)
    }

    /// Create a reward from a parent-supplied definition.
    pub fn create_reward(&self, reward: NewReward) -> Result<RewardId> {
        let reward = reward.validate()?;
        if !self.profile_exists(reward.profile_id)? {
            return Err(Error::ProfileNotFound(reward.profile_id.to_string()));
        }

        self.conn.execute(
            "INSERT INTO rewards (profile_id, name, cost) VALUES (?1, ?2, ?3)",
            params![reward.profile_id, reward.name, reward.cost],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(reward_id = id, profile_id = reward.profile_id, name = %reward.name, "created reward");
        Ok(id)
    }

    /// Get a reward by ID.
    pub fn get_reward(&self, id: RewardId) -> Result<Reward> {
        self.conn
            .query_row(
                &format!("SELECT {REWARD_COLUMNS} FROM rewards WHERE id = ?1"),
                params![id],
                reward_from_row,
            )
            .optional()?
            .ok_or(Error::RewardNotFound(id))
    }

    /// List the rewards offered to a profile.
    pub fn list_rewards(&self, profile_id: ProfileId) -> Result<Vec<Reward>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {REWARD_COLUMNS} FROM rewards WHERE profile_id = ?1 ORDER BY id"
        ))?;
        let rewards = stmt
            .query_map(params![profile_id], reward_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rewards)
    }

    /// Most recent completions for a profile, newest first.
    pub fn list_history(&self, profile_id: ProfileId, limit: usize) -> Result<Vec<HistoryEntry>> {
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(
            "SELECT id, profile_id, chore_name, completed_at, points
             FROM chore_history
             WHERE profile_id = ?1
             ORDER BY completed_at DESC, id DESC
             LIMIT ?2",
        )?;
        let entries = stmt
            .query_map(params![profile_id, limit_i64], history_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// All completion timestamps for a profile.
    pub fn history_timestamps(&self, profile_id: ProfileId) -> Result<Vec<DateTime<Utc>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT completed_at FROM chore_history WHERE profile_id = ?1")?;
        let timestamps = stmt
            .query_map(params![profile_id], |row| {
                let value: String = row.get(0)?;
                parse_timestamp(&value, "completed_at")
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(timestamps)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
