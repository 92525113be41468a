// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    daily = { "daily", Recurrence::Daily },
    weekly_caps = { "Weekly", Recurrence::Weekly },
    bi_weekly = { "Bi-weekly", Recurrence::BiWeekly },
    biweekly = { "biweekly", Recurrence::BiWeekly },
    monthly = { "MONTHLY", Recurrence::Monthly },
    custom = { "custom", Recurrence::Custom },
)]
fn recurrence_from_str(input: &str, expected: Recurrence) {
    assert_eq!(input.parse::<Recurrence>().unwrap(), expected);
}

#[test]
fn recurrence_rejects_unknown_kind() {
    let err = "yearly".parse::<Recurrence>().unwrap_err();
    assert!(matches!(err, Error::InvalidRecurrence(s) if s == "yearly"));
}

#[test]
fn recurrence_round_trips_through_storage_label() {
    for kind in [
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::BiWeekly,
        Recurrence::Monthly,
        Recurrence::Custom,
    ] {
        assert_eq!(kind.as_str().parse::<Recurrence>().unwrap(), kind);
    }
}

#[test]
fn recurrence_period_days() {
    assert_eq!(Recurrence::Daily.period_days(0), Some(1));
    assert_eq!(Recurrence::Weekly.period_days(0), Some(7));
    assert_eq!(Recurrence::BiWeekly.period_days(3), Some(14));
    assert_eq!(Recurrence::Monthly.period_days(30), None);
    assert_eq!(Recurrence::Custom.period_days(3), Some(3));
    assert_eq!(Recurrence::Custom.period_days(0), None);
}

#[parameterized(
    any = { "Any", ChoreDay::Any },
    any_lower = { "any", ChoreDay::Any },
    monday = { "Monday", ChoreDay::On(Weekday::Mon) },
    short = { "sat", ChoreDay::On(Weekday::Sat) },
)]
fn chore_day_from_str(input: &str, expected: ChoreDay) {
    assert_eq!(input.parse::<ChoreDay>().unwrap(), expected);
}

#[test]
fn chore_day_rejects_garbage() {
    assert!(matches!(
        "someday".parse::<ChoreDay>(),
        Err(Error::InvalidDay(_))
    ));
}

#[test]
fn chore_day_serializes_as_label() {
    let json = serde_json::to_string(&ChoreDay::On(Weekday::Wed)).unwrap();
    assert_eq!(json, "\"Wednesday\"");
    let back: ChoreDay = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ChoreDay::On(Weekday::Wed));
}

#[test]
fn state_from_flags() {
    assert_eq!(ChoreState::from_flags(false, false), ChoreState::Pending);
    assert_eq!(
        ChoreState::from_flags(true, false),
        ChoreState::AwaitingApproval
    );
    assert_eq!(ChoreState::from_flags(true, true), ChoreState::Approved);
}

#[test]
fn validate_trims_name() {
    let chore = NewChore::new(1, "  Make bed  ", 5).validate().unwrap();
    assert_eq!(chore.name, "Make bed");
}

#[test]
fn validate_rejects_blank_name() {
    let err = NewChore::new(1, "   ", 5).validate().unwrap_err();
    assert!(matches!(err, Error::FieldEmpty { .. }));
}

#[test]
fn validate_rejects_zero_points() {
    let err = NewChore::new(1, "Dishes", 0).validate().unwrap_err();
    assert!(matches!(err, Error::ValueTooSmall { field: "Points", .. }));
}

#[test]
fn validate_drops_interval_for_non_custom_kinds() {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let chore = NewChore::new(1, "Vacuum", 15)
        .with_schedule(ChoreDay::On(Weekday::Sat), Recurrence::Weekly)
        .with_interval(start, 9)
        .validate()
        .unwrap();
    assert_eq!(chore.start_date, None);
    assert_eq!(chore.interval_days, 0);
    assert_eq!(chore.day, ChoreDay::On(Weekday::Sat));
}

#[test]
fn validate_keeps_interval_for_custom() {
    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let chore = NewChore::new(1, "Water plants", 5)
        .with_schedule(ChoreDay::Any, Recurrence::Custom)
        .with_interval(start, 3)
        .validate()
        .unwrap();
    assert_eq!(chore.start_date, Some(start));
    assert_eq!(chore.interval_days, 3);
}

#[test]
fn validate_custom_requires_start_and_interval() {
    let missing_start = NewChore::new(1, "Water plants", 5)
        .with_schedule(ChoreDay::Any, Recurrence::Custom)
        .validate()
        .unwrap_err();
    assert!(matches!(missing_start, Error::RequiredFor { .. }));

    let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let zero_interval = NewChore::new(1, "Water plants", 5)
        .with_schedule(ChoreDay::Any, Recurrence::Custom)
        .with_interval(start, 0)
        .validate()
        .unwrap_err();
    assert!(matches!(
        zero_interval,
        Error::ValueTooSmall {
            field: "Interval",
            ..
        }
    ));
}
