// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::chore::{ChoreDay, ChoreState, Recurrence};
use crate::reward::RewardState;
use chrono::{TimeZone, Weekday};
use tempfile::tempdir;

#[test]
fn open_in_memory_creates_tables() {
    let db = Database::open_in_memory().unwrap();
    let mut stmt = db
        .conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

    for table in ["profiles", "chores", "rewards", "chore_history"] {
        assert!(tables.contains(&table.to_string()), "missing {table}");
    }
}

#[test]
fn open_file_database_uses_wal() {
    let dir = tempdir().unwrap();
    let db = Database::open(&dir.path().join("nested/chores.db")).unwrap();
    let mode: String = db
        .conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
}

#[test]
fn reopen_keeps_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chores.db");
    {
        let db = Database::open(&path).unwrap();
        db.create_profile("Carys", 50).unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.list_profiles().unwrap()[0].name, "Carys");
}

#[test]
fn migration_adds_approved_at_to_old_chores_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE chores (
            id INTEGER PRIMARY KEY,
            profile_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            is_completed INTEGER NOT NULL DEFAULT 0,
            is_approved INTEGER NOT NULL DEFAULT 0,
            points INTEGER NOT NULL DEFAULT 10,
            day TEXT NOT NULL DEFAULT 'Any',
            recurrence TEXT NOT NULL DEFAULT 'Daily',
            start_date TEXT NOT NULL DEFAULT '',
            interval_days INTEGER NOT NULL DEFAULT 0
        );",
    )
    .unwrap();

    run_migrations(&conn).unwrap();
    run_migrations(&conn).unwrap();

    let has_column: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('chores') WHERE name = 'approved_at'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(has_column);
}

#[test]
fn schema_rejects_approved_without_completed() {
    let db = Database::open_in_memory().unwrap();
    let profile = db.create_profile("Carys", 50).unwrap();
    let chore = db.create_chore(NewChore::new(profile, "Dishes", 5)).unwrap();
    let reward = db.create_reward(NewReward::new(profile, "Pick Dinner", 40)).unwrap();

    assert!(db
        .conn
        .execute("UPDATE chores SET is_approved = 1 WHERE id = ?1", params![chore])
        .is_err());
    assert!(db
        .conn
        .execute("UPDATE rewards SET is_approved = 1 WHERE id = ?1", params![reward])
        .is_err());
}

#[test]
fn resolve_profile_by_id_or_name() {
    let db = Database::open_in_memory().unwrap();
    let charles = db.create_profile("Charles", 100).unwrap();
    db.create_profile("Carys", 50).unwrap();

    assert_eq!(db.resolve_profile(&charles.to_string()).unwrap().id, charles);
    assert_eq!(db.resolve_profile("CHARLES").unwrap().id, charles);
    assert_eq!(db.resolve_profile(" carys ").unwrap().name, "Carys");
    assert!(matches!(
        db.resolve_profile("Nobody"),
        Err(Error::ProfileNotFound(_))
    ));
}

#[test]
fn get_profile_not_found() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(db.get_profile(9), Err(Error::ProfileNotFound(_))));
}

#[test]
fn create_profile_rejects_blank_name() {
    let db = Database::open_in_memory().unwrap();
    assert!(matches!(
        db.create_profile("  ", 0),
        Err(Error::FieldEmpty { .. })
    ));
}

#[test]
fn create_and_get_chore() {
    let db = Database::open_in_memory().unwrap();
    let profile = db.create_profile("Charles", 100).unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let id = db
        .create_chore(
            NewChore::new(profile, "Water plants", 5)
                .with_schedule(ChoreDay::On(Weekday::Tue), Recurrence::Custom)
                .with_interval(start, 3),
        )
        .unwrap();

    let chore = db.get_chore(id).unwrap();
    assert_eq!(chore.profile_id, profile);
    assert_eq!(chore.name, "Water plants");
    assert_eq!(chore.points, 5);
    assert_eq!(chore.day, ChoreDay::On(Weekday::Tue));
    assert_eq!(chore.recurrence, Recurrence::Custom);
    assert_eq!(chore.start_date, Some(start));
    assert_eq!(chore.interval_days, 3);
    assert_eq!(chore.state(), ChoreState::Pending);
    assert!(chore.approved_at.is_none());
}

#[test]
fn create_chore_for_unknown_profile_fails() {
    let db = Database::open_in_memory().unwrap();
    let err = db.create_chore(NewChore::new(77, "Dishes", 5)).unwrap_err();
    assert!(matches!(err, Error::ProfileNotFound(_)));
}

#[test]
fn create_reward_validates_cost() {
    let db = Database::open_in_memory().unwrap();
    let profile = db.create_profile("Wynne", 75).unwrap();
    let err = db
        .create_reward(NewReward::new(profile, "Free lunch", 0))
        .unwrap_err();
    assert!(matches!(err, Error::ValueTooSmall { field: "Cost", .. }));
}

#[test]
fn list_chores_and_rewards_are_scoped_to_profile() {
    let db = Database::open_in_memory().unwrap();
    let a = db.create_profile("Carys", 50).unwrap();
    let b = db.create_profile("Wynne", 75).unwrap();
    db.create_chore(NewChore::new(a, "Feed the Dogs", 10)).unwrap();
    db.create_chore(NewChore::new(b, "Feed the Cats", 10)).unwrap();
    db.create_reward(NewReward::new(b, "Sleepover", 100)).unwrap();

    assert_eq!(db.list_chores(a).unwrap().len(), 1);
    assert_eq!(db.list_chores(b).unwrap()[0].name, "Feed the Cats");
    assert!(db.list_rewards(a).unwrap().is_empty());
    let rewards = db.list_rewards(b).unwrap();
    assert_eq!(rewards[0].state(), RewardState::Available);
}

#[test]
fn list_history_is_newest_first_and_limited() {
    let mut db = Database::open_in_memory().unwrap();
    let profile = db.create_profile("Carys", 0).unwrap();
    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        ids.push(db.create_chore(NewChore::new(profile, name, 1)).unwrap());
    }
    for (day, id) in [(5, ids[0]), (7, ids[1]), (6, ids[2])] {
        let at = Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap();
        db.complete_chore_at(id, at).unwrap();
    }

    let history = db.list_history(profile, 2).unwrap();
    let names: Vec<&str> = history.iter().map(|h| h.chore_name.as_str()).collect();
    assert_eq!(names, vec!["Second", "Third"]);
}

#[test]
fn history_keeps_name_after_chore_is_renamed() {
    let mut db = Database::open_in_memory().unwrap();
    let profile = db.create_profile("Carys", 0).unwrap();
    let id = db.create_chore(NewChore::new(profile, "Feed the Dogs", 10)).unwrap();
    db.complete_chore(id).unwrap();

    db.conn
        .execute("UPDATE chores SET name = 'Walk the Dogs' WHERE id = ?1", params![id])
        .unwrap();

    assert_eq!(db.list_history(profile, 10).unwrap()[0].chore_name, "Feed the Dogs");
}

#[test]
fn corrupted_recurrence_surfaces_as_error() {
    let db = Database::open_in_memory().unwrap();
    let profile = db.create_profile("Carys", 0).unwrap();
    let id = db.create_chore(NewChore::new(profile, "Dishes", 5)).unwrap();
    db.conn
        .execute("UPDATE chores SET recurrence = 'Hourly' WHERE id = ?1", params![id])
        .unwrap();

    assert!(matches!(db.get_chore(id), Err(Error::Database(_))));
}

#[test]
fn parse_date_opt_handles_empty_and_invalid() {
    assert_eq!(parse_date_opt("", "start_date").unwrap(), None);
    assert_eq!(
        parse_date_opt("2025-03-03", "start_date").unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 3)
    );
    assert!(parse_date_opt("03/03/2025", "start_date").is_err());
}

#[test]
fn parse_timestamp_invalid() {
    let err = parse_timestamp("NOT-A-TIMESTAMP", "completed_at").unwrap_err();
    assert!(matches!(err, rusqlite::Error::FromSqlConversionFailure(..)));
}
