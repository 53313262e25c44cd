/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Countdown color:
/// 0 (today) → green
/// ≤ 7 days → red
/// ≤ 30 days → yellow
/// otherwise → reset
pub fn color_for_days(days: i64) -> &'static str {
    match days {
        0 => GREEN,
        1..=7 => RED,
        8..=30 => YELLOW,
        _ => RESET,
    }
}

/// Grey placeholder for missing values.
pub fn colorize_optional(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => format!("{GREY}--{RESET}"),
    }
}

pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
