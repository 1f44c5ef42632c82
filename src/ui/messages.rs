use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Render a status line without printing it (the shell collects these).
pub fn render<T: fmt::Display>(level: Level, msg: T) -> String {
    let (color, icon) = match level {
        Level::Info => (FG_BLUE, ICON_INFO),
        Level::Success => (FG_GREEN, ICON_OK),
        Level::Warning => (FG_YELLOW, ICON_WARN),
        Level::Error => (FG_RED, ICON_ERR),
    };
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) -> String {
    format!("{}{}== {} =={}", FG_BLUE, BOLD, msg, RESET)
}
