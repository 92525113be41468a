// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use cq_core::Database;
use tracing::info;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<String>, pin: Option<String>, no_seed: bool) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let today = Local::now().date_naive();
    let (work_dir, seeded) = init_impl(&target_path, pin.as_deref(), no_seed, today)?;

    println!("Initialized household at {}", work_dir.display());
    if seeded {
        println!("Added sample profiles, chores and rewards");
    }
    if pin.is_none() {
        println!("Parent PIN is the default; pass --pin to cq init or edit config.toml to change it");
    }
    Ok(())
}

/// Create `.chorequest/` under `target`, open the database and optionally
/// seed it. Returns the work dir and whether sample data was added.
pub(crate) fn init_impl(
    target: &Path,
    pin: Option<&str>,
    no_seed: bool,
    today: NaiveDate,
) -> Result<(PathBuf, bool)> {
    let config = match pin {
        Some(p) => Config::with_pin(p)?,
        None => Config::default(),
    };

    let work_dir = init_work_dir(target, &config)?;
    let mut db = Database::open(&get_db_path(&work_dir, &config))?;

    let seeded = if no_seed {
        false
    } else {
        db.seed_defaults(today)?
    };
    info!(work_dir = %work_dir.display(), seeded, "household initialized");

    Ok((work_dir, seeded))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
