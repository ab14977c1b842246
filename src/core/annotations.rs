//! Parsing of the free-text annotations embedded in `Beschreibung`.
//!
//! Two kinds of markers are recognised:
//! - meeting markers (`Meeting: Ja`, `Meeting: Nein`, ...), matched as plain
//!   substrings in a fixed precedence order;
//! - department shares (`Academy: 30%`, `Helpdesk: 70%`), first match wins.

use crate::models::{Department, Meeting};
use regex::Regex;
use std::sync::LazyLock;

/// Meeting markers in precedence order. The first marker contained in the
/// description decides the status, so the ambiguous `Ja Nein` must come
/// before the plain `Ja`.
pub const MEETING_MARKERS: [(&str, Meeting); 4] = [
    ("Meeting: Ja Nein", Meeting::Nein),
    ("Meeting: Ja", Meeting::Ja),
    ("Meeting: Nein", Meeting::Nein),
    ("Meeting:  Nein", Meeting::Nein),
];

static ACADEMY_PCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Academy: ([0-9]+)%").expect("academy pattern"));

static HELPDESK_PCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Helpdesk: ([0-9]+)%").expect("helpdesk pattern"));

/// Department shares found in a description, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Percentages {
    pub academy: u32,
    pub helpdesk: u32,
}

impl Percentages {
    pub fn get(&self, department: Department) -> u32 {
        match department {
            Department::Academy => self.academy,
            Department::Helpdesk => self.helpdesk,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.academy) + u64::from(self.helpdesk)
    }

    /// No share at all: the row produces no output.
    pub fn is_empty(&self) -> bool {
        self.academy == 0 && self.helpdesk == 0
    }
}

/// Derive the meeting status. Absent description → `Meeting::Unset`.
pub fn meeting_status(description: Option<&str>) -> Meeting {
    let Some(text) = description else {
        return Meeting::Unset;
    };

    MEETING_MARKERS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, status)| *status)
        .unwrap_or(Meeting::Unset)
}

/// Extract the share for one department. A missing marker is 0.
///
/// Returns the offending digits when the number does not fit in a `u32`.
pub fn percentage(description: Option<&str>, department: Department) -> Result<u32, String> {
    let Some(text) = description else {
        return Ok(0);
    };

    let pattern = match department {
        Department::Academy => &*ACADEMY_PCT,
        Department::Helpdesk => &*HELPDESK_PCT,
    };

    match pattern.captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().parse::<u32>().map_err(|_| m.as_str().to_string()),
        None => Ok(0),
    }
}

/// Extract both department shares.
pub fn percentages(description: Option<&str>) -> Result<Percentages, String> {
    Ok(Percentages {
        academy: percentage(description, Department::Academy)?,
        helpdesk: percentage(description, Department::Helpdesk)?,
    })
}
