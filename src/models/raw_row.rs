use serde::Deserialize;

/// Column names a timesheet export must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Von", "Bis", "Beschreibung", "Projekt", "Aufgabe", "Dauer"];

/// One row of the timesheet export, exactly as read from the CSV.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRow {
    /// 1-based line number in the source file (header is line 1).
    #[serde(skip)]
    pub line: usize,

    #[serde(rename = "Von")]
    pub von: String,

    #[serde(rename = "Bis")]
    pub bis: String,

    #[serde(rename = "Beschreibung", default)]
    pub beschreibung: Option<String>,

    #[serde(rename = "Projekt", default)]
    pub projekt: Option<String>,

    #[serde(rename = "Aufgabe", default)]
    pub aufgabe: Option<String>,

    #[serde(rename = "Dauer")]
    pub dauer: String,
}

impl RawRow {
    pub fn new(von: &str, bis: &str, dauer: &str) -> Self {
        Self {
            line: 0,
            von: von.to_string(),
            bis: bis.to_string(),
            beschreibung: None,
            projekt: None,
            aufgabe: None,
            dauer: dauer.to_string(),
        }
    }

    pub fn with_description(mut self, text: &str) -> Self {
        self.beschreibung = Some(text.to_string());
        self
    }

    pub fn with_project(mut self, code: &str) -> Self {
        self.projekt = Some(code.to_string());
        self
    }

    pub fn with_task(mut self, task: &str) -> Self {
        self.aufgabe = Some(task.to_string());
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}
