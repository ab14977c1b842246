use super::{department::Department, meeting::Meeting};
use chrono::NaiveDateTime;

/// A row after enrichment and splitting: one per department share.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow {
    pub von: NaiveDateTime,
    pub bis: NaiveDateTime,
    /// Display name of the project, `None` for unknown codes.
    pub projekt: Option<String>,
    pub aufgabe: String,
    /// Hours booked on `abteilung`, rounded to two decimals.
    pub dauer: f64,
    pub meeting: Meeting,
    pub abteilung: Department,
}

impl EnrichedRow {
    pub fn project_str(&self) -> &str {
        self.projekt.as_deref().unwrap_or("")
    }

    pub fn von_str(&self) -> String {
        self.von.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn bis_str(&self) -> String {
        self.bis.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
