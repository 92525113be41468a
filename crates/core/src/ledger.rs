// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Point balance mutations.
//!
//! Every write to `profiles.points` goes through this module. The functions
//! take a plain connection so callers can run them inside the transaction
//! that also flips the chore or reward flags.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::profile::ProfileId;

/// Add `amount` to a profile's balance.
pub fn credit(conn: &Connection, profile_id: ProfileId, amount: i64) -> Result<()> {
    let affected = conn.execute(
        "UPDATE profiles SET points = points + ?1 WHERE id = ?2",
        params![amount, profile_id],
    )?;
    if affected == 0 {
        return Err(Error::ProfileNotFound(profile_id.to_string()));
    }
    tracing::debug!(profile_id, amount, "credited points");
    Ok(())
}

/// Subtract `cost` from a profile's balance if the balance covers it.
///
/// The check and the write are one conditional UPDATE, so two claims racing
/// on the same profile cannot both pass the balance check. Returns `true`
/// when exactly one row was debited.
pub fn debit_if_sufficient(conn: &Connection, profile_id: ProfileId, cost: i64) -> Result<bool> {
    let affected = conn.execute(
        "UPDATE profiles SET points = points - ?1 WHERE id = ?2 AND points >= ?1",
        params![cost, profile_id],
    )?;
    let debited = affected == 1;
    if debited {
        tracing::debug!(profile_id, cost, "debited points");
    } else {
        tracing::debug!(profile_id, cost, "debit refused");
    }
    Ok(debited)
}

/// Return a previously debited amount to a profile.
pub fn refund(conn: &Connection, profile_id: ProfileId, amount: i64) -> Result<()> {
    credit(conn, profile_id, amount)
}

/// Current balance of a profile.
pub fn balance(conn: &Connection, profile_id: ProfileId) -> Result<i64> {
    conn.query_row(
        "SELECT points FROM profiles WHERE id = ?1",
        params![profile_id],
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| Error::ProfileNotFound(profile_id.to_string()))
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
