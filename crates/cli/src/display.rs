// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Local;
use cq_core::{
    Chore, ChoreDay, HistoryEntry, PendingChore, PendingReward, Profile, ProfileSummary,
    Recurrence, Reward,
};

use crate::colors;

/// Describe when a chore comes round again.
///
/// - `Daily`
/// - `Weekly on Monday`
/// - `Every 3 days from 2026-10-16`
pub fn format_schedule(chore: &Chore) -> String {
    match (chore.recurrence, chore.day, chore.start_date) {
        (Recurrence::Custom, _, Some(start)) => {
            format!("Every {} days from {}", chore.interval_days, start)
        }
        (Recurrence::Weekly | Recurrence::BiWeekly, ChoreDay::On(_), _) => {
            format!("{} on {}", chore.recurrence.as_str(), chore.day.as_str())
        }
        (kind, _, _) => kind.as_str().to_string(),
    }
}

/// Format a single chore line for list output
pub fn format_chore_line(chore: &Chore) -> String {
    format!(
        "- [{}] {} ({} pts, {}) {}",
        chore.id,
        chore.name,
        chore.points,
        format_schedule(chore),
        colors::state(chore.state().as_str())
    )
}

/// Format a single reward line for list output
pub fn format_reward_line(reward: &Reward) -> String {
    format!(
        "- [{}] {} ({} pts) {}",
        reward.id,
        reward.name,
        reward.cost,
        colors::state(reward.state().as_str())
    )
}

pub fn format_profile_line(profile: &Profile) -> String {
    format!("[{}] {}: {} pts", profile.id, profile.name, profile.points)
}

/// Format a history entry: `2026-10-16 18:04  Feed the Dogs  +10`
pub fn format_history_line(entry: &HistoryEntry) -> String {
    format!(
        "{}  {}  +{}",
        entry.completed_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        entry.chore_name,
        entry.points
    )
}

/// Format one profile's board section.
///
/// Output format:
/// ```text
/// Carys: 50 pts (XP 50/100, 2 active days)
///   Chores:
///     - [1] Feed the Dogs (10 pts, Daily) pending
///   Rewards:
///     - [4] Pick Dinner (40 pts) available
/// ```
pub fn format_summary(summary: &ProfileSummary) -> String {
    let days = match summary.active_days {
        1 => "1 active day".to_string(),
        n => format!("{n} active days"),
    };
    let mut lines = vec![format!(
        "{}: {} pts (XP {}/{}, {})",
        summary.profile.name,
        summary.profile.points,
        summary.xp,
        cq_core::stats::XP_PER_LEVEL,
        days
    )];

    lines.push("  Chores:".to_string());
    if summary.open_chores.is_empty() {
        lines.push("    (none)".to_string());
    }
    for chore in &summary.open_chores {
        lines.push(format!("    {}", format_chore_line(chore)));
    }

    lines.push("  Rewards:".to_string());
    if summary.available_rewards.is_empty() {
        lines.push("    (none)".to_string());
    }
    for reward in &summary.available_rewards {
        lines.push(format!("    {}", format_reward_line(reward)));
    }

    lines.join("\n")
}

/// Format the admin approval queues.
pub fn format_pending(chores: &[PendingChore], rewards: &[PendingReward]) -> String {
    let mut lines = vec!["Chores awaiting approval:".to_string()];
    if chores.is_empty() {
        lines.push("  (none)".to_string());
    }
    for c in chores {
        lines.push(format!(
            "  - [{}] {}: {} (+{} pts)",
            c.chore_id, c.profile_name, c.chore_name, c.points
        ));
    }

    lines.push(String::new());
    lines.push("Rewards awaiting approval:".to_string());
    if rewards.is_empty() {
        lines.push("  (none)".to_string());
    }
    for r in rewards {
        lines.push(format!(
            "  - [{}] {}: {} ({} pts)",
            r.reward_id, r.profile_name, r.reward_name, r.cost
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
