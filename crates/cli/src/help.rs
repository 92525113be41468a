// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let header = colors::fg256(colors::codes::HEADER);
    let literal = colors::fg256(colors::codes::LITERAL);
    let context = colors::fg256(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_board}
  {board}       Show every profile's points, chores and rewards
  {profiles}    List profiles and balances
  {chores}      List a profile's chores
  {rewards}     List a profile's rewards
  {history}     Show a profile's completed chores
  {done}        Mark chore(s) as done
  {claim}       Claim a reward

{header_parent}
  {admin}       Approve, reject and add chores and rewards (needs PIN)

{header_setup}
  {init}        Create a household in the current directory
  {completion}  Generate shell completions
",
        header_board = colors::header("Board:"),
        header_parent = colors::header("Parents:"),
        header_setup = colors::header("Setup:"),
        board = colors::literal("board"),
        profiles = colors::literal("profiles"),
        chores = colors::literal("chores"),
        rewards = colors::literal("rewards"),
        history = colors::literal("history"),
        done = colors::literal("done"),
        claim = colors::literal("claim"),
        admin = colors::literal("admin"),
        init = colors::literal("init"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  cq init                          Create a household with sample data
  cq board                         See everyone's points and chores
  cq done <id>                     Mark a chore as done
  cq admin --pin <pin> pending     Review what needs approval",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
