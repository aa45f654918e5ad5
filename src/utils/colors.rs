/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Timer state color:
/// running → green, paused (active but frozen) → yellow, idle → grey.
pub fn color_for_state(active: bool, running: bool) -> &'static str {
    if running {
        GREEN
    } else if active {
        YELLOW
    } else {
        GREY
    }
}

/// Returns formatted grey text for empty-looking values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty()
        || value.trim() == "--:--"
        || value.trim() == "00:00:00"
        || value.trim() == "00h 00m"
    {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
