// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common option patterns.

use clap::Args;

use super::OutputFormat;

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Recurrence options for a new chore.
#[derive(Args, Clone, Debug)]
pub struct ScheduleArgs {
    /// Day the chore is due ("any" or a weekday name)
    #[arg(long, default_value = "any")]
    pub day: String,

    /// How often the chore recurs (daily, weekly, bi-weekly, monthly, custom)
    #[arg(long, short = 'r', default_value = "daily")]
    pub recurrence: String,

    /// First due date for custom recurrence (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Repeat every N days for custom recurrence
    #[arg(long, value_name = "DAYS", default_value_t = 3)]
    pub every: u32,
}
