/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Attendance percentage color:
/// \>= 75 → green
/// \>= 50 → yellow
/// below → red
pub fn color_for_percentage(value: f64) -> &'static str {
    if value >= 75.0 {
        GREEN
    } else if value >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Present → green "P", absent → red "A".
pub fn colorize_presence(is_present: bool) -> String {
    if is_present {
        format!("{GREEN}P{RESET}")
    } else {
        format!("{RED}A{RESET}")
    }
}

/// Grey placeholder for empty values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
