/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

fn is_blank(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "-"
}

/// Grey placeholder for missing values ("-"), unchanged text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if is_blank(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Green for punch-in times, red for punch-out times.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_blank(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
