// src/export/model.rs

use crate::models::EnrichedRow;
use crate::utils::formatting::format_hours;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat row written by the CSV and JSON exports.
///
/// `Projekt` stays `None` for unmapped codes: `null` in JSON, blank in CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RowExport {
    #[serde(rename = "Von")]
    pub von: String,
    #[serde(rename = "Bis")]
    pub bis: String,
    #[serde(rename = "Projekt")]
    pub projekt: Option<String>,
    #[serde(rename = "Aufgabe")]
    pub aufgabe: String,
    #[serde(rename = "Dauer")]
    pub dauer: f64,
    #[serde(rename = "Meeting")]
    pub meeting: String,
    #[serde(rename = "Abteilung")]
    pub abteilung: String,
}

impl From<&EnrichedRow> for RowExport {
    fn from(r: &EnrichedRow) -> Self {
        Self {
            von: r.von_str(),
            bis: r.bis_str(),
            projekt: r.projekt.clone(),
            aufgabe: r.aufgabe.clone(),
            dauer: r.dauer,
            meeting: r.meeting.as_str().to_string(),
            abteilung: r.abteilung.as_str().to_string(),
        }
    }
}

/// Typed cell for the spreadsheet and PDF writers.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Hours(f64),
    Timestamp(NaiveDateTime),
}

impl Cell {
    pub(crate) fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Hours(h) => format_hours(*h),
            Cell::Timestamp(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Header for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Von",
        "Bis",
        "Projekt",
        "Aufgabe",
        "Dauer",
        "Meeting",
        "Abteilung",
    ]
}

pub(crate) fn row_cells(r: &EnrichedRow) -> Vec<Cell> {
    vec![
        Cell::Timestamp(r.von),
        Cell::Timestamp(r.bis),
        Cell::Text(r.project_str().to_string()),
        Cell::Text(r.aufgabe.clone()),
        Cell::Hours(r.dauer),
        Cell::Text(r.meeting.as_str().to_string()),
        Cell::Text(r.abteilung.as_str().to_string()),
    ]
}

pub(crate) fn rows_to_table(rows: &[EnrichedRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| row_cells(r).iter().map(Cell::display).collect())
        .collect()
}
