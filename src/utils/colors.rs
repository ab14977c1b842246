//! ANSI color helper utilities for terminal output.
use crate::models::{Department, Meeting};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colors are on unless `NO_COLOR` is set (https://no-color.org).
pub fn enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn paint(value: &str, color: &str) -> String {
    if enabled() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn color_for_department(d: Department) -> &'static str {
    match d {
        Department::Academy => BLUE,
        Department::Helpdesk => MAGENTA,
    }
}

pub fn color_for_meeting(m: Meeting) -> &'static str {
    match m {
        Meeting::Ja => GREEN,
        Meeting::Nein => YELLOW,
        Meeting::Unset => GREY,
    }
}
