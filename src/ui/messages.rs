//! User-facing status lines. This is the only place the crate writes
//! progress, warnings and errors to the terminal.

use crate::utils::colors;
use std::fmt;

const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if colors::enabled() {
        format!("{color}{BOLD}{icon}{} {msg}", colors::RESET)
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Section header above a table.
pub fn header<T: fmt::Display>(msg: T) {
    if colors::enabled() {
        println!("\n{FG_BLUE}{BOLD}== {msg}{}", colors::RESET);
    } else {
        println!("\n== {msg}");
    }
}

/// Placeholder printed instead of an empty group table.
pub fn no_data(label: &str) {
    println!("{label}: No data available for chart.");
}
