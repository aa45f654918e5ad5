//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Human-readable duration from seconds.
///
/// Short form: `02:25` (hours:minutes). Long form: `02h 25m`.
pub fn secs2readable(secs: i64, short: bool) -> String {
    let abs = secs.abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;

    let sign = if secs < 0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
