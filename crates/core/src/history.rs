// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only audit log of chore completions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::ProfileId;

/// One completion event.
///
/// The chore name is copied rather than referenced so the entry keeps the
/// label the chore had when it was completed. Entries are written when a
/// chore is completed and are never changed afterwards, even if the
/// completion is later rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub profile_id: ProfileId,
    pub chore_name: String,
    pub completed_at: DateTime<Utc>,
    /// Point value of the chore at completion time.
    pub points: i64,
}
