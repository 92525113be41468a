// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chore definitions and their completion state.
//!
//! A chore moves `pending -> awaiting_approval -> approved`, and a parent may
//! send an awaiting chore back to `pending`. The stored representation keeps
//! two flags (`completed`, `approved`); [`ChoreState`] is derived from them.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::profile::ProfileId;

/// Row identifier of a chore.
pub type ChoreId = i64;

/// How often a chore comes back after it has been approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    /// Every `interval_days` days counted from the chore's start date.
    Custom,
}

impl Recurrence {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::Daily => "Daily",
            Recurrence::Weekly => "Weekly",
            Recurrence::BiWeekly => "Bi-weekly",
            Recurrence::Monthly => "Monthly",
            Recurrence::Custom => "Custom",
        }
    }

    /// Fixed period in days, if the kind has one.
    ///
    /// Monthly has no fixed length. Custom uses the chore's own interval and
    /// has no period when the interval is zero.
    pub fn period_days(&self, interval_days: u32) -> Option<u32> {
        match self {
            Recurrence::Daily => Some(1),
            Recurrence::Weekly => Some(7),
            Recurrence::BiWeekly => Some(14),
            Recurrence::Monthly => None,
            Recurrence::Custom => (interval_days > 0).then_some(interval_days),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "bi-weekly" | "biweekly" | "bi_weekly" => Ok(Recurrence::BiWeekly),
            "monthly" => Ok(Recurrence::Monthly),
            "custom" => Ok(Recurrence::Custom),
            _ => Err(Error::InvalidRecurrence(s.to_string())),
        }
    }
}

/// Day of the week a chore is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChoreDay {
    Any,
    On(Weekday),
}

impl ChoreDay {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreDay::Any => "Any",
            ChoreDay::On(Weekday::Mon) => "Monday",
            ChoreDay::On(Weekday::Tue) => "Tuesday",
            ChoreDay::On(Weekday::Wed) => "Wednesday",
            ChoreDay::On(Weekday::Thu) => "Thursday",
            ChoreDay::On(Weekday::Fri) => "Friday",
            ChoreDay::On(Weekday::Sat) => "Saturday",
            ChoreDay::On(Weekday::Sun) => "Sunday",
        }
    }

    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            ChoreDay::Any => None,
            ChoreDay::On(day) => Some(*day),
        }
    }
}

impl fmt::Display for ChoreDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChoreDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") {
            return Ok(ChoreDay::Any);
        }
        trimmed
            .parse::<Weekday>()
            .map(ChoreDay::On)
            .map_err(|_| Error::InvalidDay(s.to_string()))
    }
}

impl From<ChoreDay> for String {
    fn from(day: ChoreDay) -> Self {
        day.as_str().to_string()
    }
}

impl TryFrom<String> for ChoreDay {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Where a chore sits in the completion workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoreState {
    /// Waiting to be done.
    Pending,
    /// Marked done by the child, waiting for a parent.
    AwaitingApproval,
    /// Approved and paid out.
    Approved,
}

impl ChoreState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoreState::Pending => "pending",
            ChoreState::AwaitingApproval => "awaiting_approval",
            ChoreState::Approved => "approved",
        }
    }

    /// Derive the state from the stored flags.
    pub fn from_flags(completed: bool, approved: bool) -> Self {
        match (completed, approved) {
            (_, true) => ChoreState::Approved,
            (true, false) => ChoreState::AwaitingApproval,
            (false, false) => ChoreState::Pending,
        }
    }

    /// Get valid transition targets as a formatted string.
    pub fn valid_targets(&self) -> String {
        match self {
            ChoreState::Pending => "awaiting_approval (complete)".to_string(),
            ChoreState::AwaitingApproval => {
                "approved (approve), pending (reject)".to_string()
            }
            ChoreState::Approved => "pending (renew, once the next occurrence is due)".to_string(),
        }
    }
}

impl fmt::Display for ChoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A chore assigned to one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub profile_id: ProfileId,
    /// Short description shown on the board.
    pub name: String,
    /// Points credited on approval.
    pub points: i64,
    pub completed: bool,
    pub approved: bool,
    pub day: ChoreDay,
    pub recurrence: Recurrence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub interval_days: u32,
    /// When the chore was last approved. Cleared on renewal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl Chore {
    pub fn state(&self) -> ChoreState {
        ChoreState::from_flags(self.completed, self.approved)
    }
}

/// Fields for a chore created by a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    pub profile_id: ProfileId,
    pub name: String,
    pub points: i64,
    pub day: ChoreDay,
    pub recurrence: Recurrence,
    pub start_date: Option<NaiveDate>,
    pub interval_days: u32,
}

impl NewChore {
    /// A daily chore for any day of the week.
    pub fn new(profile_id: ProfileId, name: impl Into<String>, points: i64) -> Self {
        NewChore {
            profile_id,
            name: name.into(),
            points,
            day: ChoreDay::Any,
            recurrence: Recurrence::Daily,
            start_date: None,
            interval_days: 0,
        }
    }

    pub fn with_schedule(mut self, day: ChoreDay, recurrence: Recurrence) -> Self {
        self.day = day;
        self.recurrence = recurrence;
        self
    }

    /// Start date and interval, only kept for [`Recurrence::Custom`].
    pub fn with_interval(mut self, start_date: NaiveDate, interval_days: u32) -> Self {
        self.start_date = Some(start_date);
        self.interval_days = interval_days;
        self
    }

    /// Check the fields and return the normalized definition to store.
    ///
    /// The name is trimmed. Non-custom kinds drop any start date and
    /// interval.
    pub fn validate(self) -> Result<NewChore> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::FieldEmpty {
                field: "Description",
            });
        }
        if self.points < 1 {
            return Err(Error::ValueTooSmall {
                field: "Points",
                min: 1,
                actual: self.points,
            });
        }

        let (start_date, interval_days) = if self.recurrence == Recurrence::Custom {
            let start = self.start_date.ok_or(Error::RequiredFor {
                field: "Start date",
                operation: "custom recurrence",
            })?;
            if self.interval_days < 1 {
                return Err(Error::ValueTooSmall {
                    field: "Interval",
                    min: 1,
                    actual: i64::from(self.interval_days),
                });
            }
            (Some(start), self.interval_days)
        } else {
            (None, 0)
        };

        Ok(NewChore {
            name,
            start_date,
            interval_days,
            ..self
        })
    }
}

#[cfg(test)]
#[path = "chore_tests.rs"]
mod tests;
