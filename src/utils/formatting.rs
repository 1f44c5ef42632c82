//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Amounts are always shown with two decimals.
pub fn money(v: f64) -> String {
    format!("{:.2}", v)
}

/// Separator line of `width` characters built from the configured separator.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
