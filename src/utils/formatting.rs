//! Formatting utilities used for CLI and export outputs.

use crate::models::event_type::EventType;
use crate::utils::colors::{BLUE, CYAN, GREY, MAGENTA, RED, YELLOW};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to a display width (accented characters count as one column).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Countdown in words.
pub fn days2readable(days: i64) -> String {
    match days {
        0 => "aujourd'hui".to_string(),
        1 => "demain".to_string(),
        n => format!("dans {} jours", n),
    }
}

/// Label and ANSI color for an event type.
pub fn describe_type(kind: EventType) -> (&'static str, &'static str) {
    let color = match kind {
        EventType::Birthday => MAGENTA,
        EventType::Anniversary => RED,
        EventType::Memorial => GREY,
        EventType::Promotion => BLUE,
        EventType::SpecialEvent => YELLOW,
        EventType::Retirement => CYAN,
    };
    (kind.label(), color)
}
