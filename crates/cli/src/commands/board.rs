// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cq_core::{Database, Profile, ProfileSummary};

use crate::cli::OutputFormat;
use crate::display::{format_profile_line, format_summary};
use crate::error::Result;

use super::{emit, open_db};

pub fn board(format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    board_impl(&db, format)
}

/// Collect the board summary for every profile, in id order.
pub(crate) fn summaries(db: &Database) -> Result<Vec<ProfileSummary>> {
    db.list_profiles()?
        .iter()
        .map(|p| Ok(db.profile_summary(p.id)?))
        .collect()
}

pub(crate) fn board_impl(db: &Database, format: OutputFormat) -> Result<()> {
    let all = summaries(db)?;
    emit(format, &all, |all| {
        if all.is_empty() {
            println!("No profiles yet");
            return;
        }
        let sections: Vec<String> = all.iter().map(format_summary).collect();
        println!("{}", sections.join("\n\n"));
    })
}

pub fn profiles(format: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    profiles_impl(&db, format)
}

pub(crate) fn profiles_impl(db: &Database, format: OutputFormat) -> Result<()> {
    let profiles: Vec<Profile> = db.list_profiles()?;
    emit(format, &profiles, |profiles| {
        for p in profiles {
            println!("{}", format_profile_line(p));
        }
    })
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
