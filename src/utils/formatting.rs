//! Formatting utilities used for CLI and export outputs.

/// Format a price in cents the way the shop lists it: whole dollars when
/// even, two decimals otherwise ("$65", "$87.50").
pub fn format_price(cents: i64) -> String {
    if cents % 100 == 0 {
        format!("${}", cents / 100)
    } else {
        format!("${}.{:02}", cents / 100, cents % 100)
    }
}

/// Compact human-readable duration: "45m", "1h", "1h 15m".
pub fn format_duration(mins: i64) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    if hours == 0 {
        format!("{}m", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}
