//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Minutes as "HHh MMm" (or "HH:MM" when `short`).
pub fn mins2readable(mins: i64, short: bool) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
