//! Time formatting: stopwatch readouts in centiseconds and seconds.

/// Format centiseconds as `HH:MM:SS.cc`, the live stopwatch readout.
pub fn format_centis(cs: i64) -> String {
    let total_secs = cs / 100;
    let centis = cs % 100;
    format!("{}.{:02}", format_seconds(total_secs), centis)
}

/// Format seconds as `HH:MM:SS`.
pub fn format_seconds(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
