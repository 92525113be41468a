// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! chorequest - a household chore and reward tracker.
//!
//! This crate provides the `cq` command-line surface on top of [`cq_core`]:
//! a child-facing board for marking chores done and claiming rewards, and a
//! PIN-gated admin surface for parents.
//!
//! # Main Components
//!
//! - [`Config`] - Household configuration (parent PIN, history limit, database location)
//! - [`ParentSession`] - Proof that the parent PIN was checked
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use chorequest::{init_work_dir, find_work_dir, get_db_path, Config};
//!
//! let work_dir = init_work_dir(Path::new("."), &Config::default())?;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = cq_core::Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;

pub mod config;
pub mod error;
pub mod session;

pub use cli::{AdminCommand, Cli, Command, OutputArgs, OutputFormat, ScheduleArgs};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use session::ParentSession;

use clap::CommandFactory;
use clap_complete::generate;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            path,
            pin,
            no_seed,
        } => commands::init::run(path, pin, no_seed),
        Command::Board { output } => commands::board::board(output.output),
        Command::Profiles { output } => commands::board::profiles(output.output),
        Command::Chores {
            profile,
            all,
            output,
        } => commands::list::chores(&profile, all, output.output),
        Command::Rewards {
            profile,
            all,
            output,
        } => commands::list::rewards(&profile, all, output.output),
        Command::History {
            profile,
            limit,
            output,
        } => commands::list::history(&profile, limit, output.output),
        Command::Done { ids } => commands::lifecycle::done(&ids),
        Command::Claim { id } => commands::lifecycle::claim(id),
        Command::Admin { pin, command } => commands::admin::run(pin, command),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cq", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
