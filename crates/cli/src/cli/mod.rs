// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{OutputArgs, ScheduleArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "cq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A household chore and reward tracker")]
#[command(
    long_about = "A household chore and reward tracker.\n\n\
    Children mark chores done and claim rewards; a parent approves them with a PIN."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if cq was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a household in the current directory
    #[command(after_help = colors::examples("\
Examples:
  cq init                    Create .chorequest/ with sample profiles
  cq init --pin 4321         Use a custom parent PIN
  cq init ~/family --no-seed  Start with an empty household"))]
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<String>,

        /// Parent PIN for admin commands (default: 1234)
        #[arg(long)]
        pin: Option<String>,

        /// Do not add the sample profiles, chores and rewards
        #[arg(long)]
        no_seed: bool,
    },

    /// Show every profile's points, chores and rewards
    Board {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List profiles and balances
    Profiles {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List a profile's chores
    #[command(after_help = colors::examples("\
Examples:
  cq chores Carys            Chores not yet approved
  cq chores 2 --all          Every chore, including approved ones"))]
    Chores {
        /// Profile name or id
        profile: String,

        /// Include approved chores
        #[arg(long, short)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List a profile's rewards
    Rewards {
        /// Profile name or id
        profile: String,

        /// Include claimed and approved rewards
        #[arg(long, short)]
        all: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a profile's completed chores, newest first
    History {
        /// Profile name or id
        profile: String,

        /// Maximum number of entries (default from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Mark chore(s) as done
    #[command(after_help = colors::examples("\
Examples:
  cq done 3                  Mark chore 3 as done
  cq done 3 4 5              Mark several chores as done"))]
    Done {
        /// Chore id(s)
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Claim a reward
    Claim {
        /// Reward id
        id: i64,
    },

    /// Parent commands (require the PIN)
    #[command(after_help = colors::examples("\
Examples:
  cq admin --pin 1234 pending                    What needs approval
  cq admin --pin 1234 approve-chore 3            Approve and award points
  cq admin --pin 1234 add-chore Carys \"Dishes\"   Add a daily chore
  CQ_PIN=1234 cq admin renew                     Reset recurring chores that are due"))]
    Admin {
        /// Parent PIN (or set CQ_PIN)
        #[arg(long, global = true)]
        pin: Option<String>,

        #[command(subcommand)]
        command: AdminCommand,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List completed chores and claimed rewards awaiting approval
    Pending {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Approve completed chore(s) and award their points
    ApproveChore {
        /// Chore id(s)
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Send completed chore(s) back to pending
    RejectChore {
        /// Chore id(s)
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Approve claimed reward(s)
    ApproveReward {
        /// Reward id(s)
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Reject claimed reward(s) and refund their cost
    RejectReward {
        /// Reward id(s)
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Add a chore for a profile
    #[command(after_help = colors::examples("\
Examples:
  cq admin add-chore Carys \"Feed the fish\" --points 5
  cq admin add-chore Wynne \"Bins\" -r weekly --day tuesday
  cq admin add-chore Charles \"Water plants\" -r custom --every 3"))]
    AddChore {
        /// Profile name or id
        profile: String,

        /// What needs doing
        #[arg(value_parser = non_empty_string)]
        description: String,

        /// Points awarded on approval
        #[arg(long, short, default_value_t = 10)]
        points: i64,

        #[command(flatten)]
        schedule: ScheduleArgs,
    },

    /// Add a reward for a profile
    AddReward {
        /// Profile name or id
        profile: String,

        /// What the reward is
        #[arg(value_parser = non_empty_string)]
        description: String,

        /// Points it costs
        #[arg(long, short, default_value_t = 50)]
        cost: i64,
    },

    /// Return approved recurring chores to pending once they are due again
    Renew {
        /// Treat this date as today (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },
}
