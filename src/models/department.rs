use clap::ValueEnum;
use serde::Serialize;

/// Department a share of a tracked row is booked on (`Abteilung`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum)]
pub enum Department {
    Academy,
    Helpdesk,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Academy => "Academy",
            Department::Helpdesk => "Helpdesk",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
