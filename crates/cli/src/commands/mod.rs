// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod admin;
pub mod board;
pub mod init;
pub mod lifecycle;
pub mod list;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use cq_core::Database;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// Print `value` as pretty JSON, or run `text` for the plain rendering.
pub(crate) fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

/// Apply `op` to each id, reporting failures without stopping.
///
/// A single id returns its own error. Several ids return
/// [`Error::PartialBulkFailure`] if any of them failed.
pub(crate) fn for_each_id<F>(ids: &[i64], mut op: F) -> Result<()>
where
    F: FnMut(i64) -> Result<()>,
{
    if let [id] = ids {
        return op(*id);
    }

    let mut failed = 0;
    for &id in ids {
        if let Err(e) = op(id) {
            eprintln!("error: {}: {}", id, e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(Error::PartialBulkFailure {
            succeeded: ids.len() - failed,
            failed,
        });
    }
    Ok(())
}
