// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use anstyle::{Ansi256Color, AnsiColor, Color, Style};

use crate::env;

/// ANSI 256-color codes used across help and board output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and names: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and secondary detail: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

pub(crate) fn fg256(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(fg256(codes::HEADER), text)
}

/// Apply literal color (commands, names) to text.
pub fn literal(text: &str) -> String {
    paint(fg256(codes::LITERAL), text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(fg256(codes::CONTEXT), text)
}

/// Highlight a chore or reward state label on the board.
///
/// Returns the label untouched when colors are off.
pub fn state(label: &str) -> String {
    if !should_colorize() {
        return label.to_string();
    }
    let color = match label {
        "approved" => AnsiColor::Green,
        "awaiting_approval" | "claimed" => AnsiColor::Yellow,
        _ => return literal(label),
    };
    paint(Style::new().fg_color(Some(Color::Ansi(color))), label)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` become headers. For `cq command <arg>    Description`
/// lines the command is painted as a literal and `<placeholders>` as context.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    colorize_command(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Paint each word of a command, keeping `<placeholder>` words dimmer.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') || word.starts_with('"') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (the first run of 2+ spaces).
pub fn find_description_start(line: &str) -> Option<usize> {
    line.find("  ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
