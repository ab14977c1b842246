//! Row enrichment and department split.
//!
//! Every raw row is parsed, annotated and then split into one row per
//! department share found in its description. Rows without any share are
//! dropped and reported in [`Diagnostics`].

use crate::core::annotations::{self, Percentages};
use crate::errors::{AppError, AppResult};
use crate::models::project::project_name;
use crate::models::{Department, EnrichedRow, RawRow};
use crate::utils::formatting::round2;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDateTime;

/// Non-fatal findings collected while transforming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    /// Source lines without any department share.
    pub dropped: Vec<usize>,
    /// Distinct project codes missing from the project table, first-seen order.
    pub unmapped_projects: Vec<String>,
    /// Source lines whose shares add up to more than 100%.
    pub over_allocated: Vec<usize>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.unmapped_projects.is_empty() && self.over_allocated.is_empty()
    }
}

/// Result of a transform: the split rows plus what was noticed on the way.
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    pub rows: Vec<EnrichedRow>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, Default)]
pub struct TimesheetTransformer {
    /// chrono formats tried after the built-in timestamp formats.
    extra_formats: Vec<String>,
}

impl TimesheetTransformer {
    pub fn new(extra_formats: Vec<String>) -> Self {
        Self { extra_formats }
    }

    /// Enrich and split `rows`. Any malformed timestamp, duration or
    /// percentage aborts the whole transform.
    pub fn transform(&self, rows: &[RawRow]) -> AppResult<Vec<EnrichedRow>> {
        self.transform_with_diagnostics(rows).map(|t| t.rows)
    }

    pub fn transform_with_diagnostics(&self, rows: &[RawRow]) -> AppResult<Transformed> {
        let mut out = Vec::with_capacity(rows.len() * 2);
        let mut diagnostics = Diagnostics::default();

        for (idx, raw) in rows.iter().enumerate() {
            // header is line 1
            let line = if raw.line > 0 { raw.line } else { idx + 2 };

            let von = self.timestamp(&raw.von, "Von", line)?;
            let bis = self.timestamp(&raw.bis, "Bis", line)?;
            let dauer = parse_duration(&raw.dauer, line)?;

            let description = raw.beschreibung.as_deref();
            let meeting = annotations::meeting_status(description);
            let projekt = map_project(raw.projekt.as_deref(), &mut diagnostics);

            let shares = annotations::percentages(description)
                .map_err(|value| AppError::InvalidPercentage { line, value })?;

            if shares.is_empty() {
                diagnostics.dropped.push(line);
                continue;
            }

            let divisor = share_divisor(&shares);
            if divisor > 100.0 {
                diagnostics.over_allocated.push(line);
            }

            let aufgabe = raw.aufgabe.clone().unwrap_or_default();

            for department in [Department::Academy, Department::Helpdesk] {
                let pct = shares.get(department);
                if pct == 0 {
                    continue;
                }

                out.push(EnrichedRow {
                    von,
                    bis,
                    projekt: projekt.clone(),
                    aufgabe: aufgabe.clone(),
                    dauer: round2(dauer * (f64::from(pct) / divisor)),
                    meeting,
                    abteilung: department,
                });
            }
        }

        Ok(Transformed {
            rows: out,
            diagnostics,
        })
    }

    fn timestamp(&self, value: &str, column: &'static str, line: usize) -> AppResult<NaiveDateTime> {
        parse_timestamp(value, &self.extra_formats).ok_or_else(|| AppError::InvalidTimestamp {
            line,
            column,
            value: value.to_string(),
        })
    }
}

/// Transform with the built-in timestamp formats only.
pub fn transform(rows: &[RawRow]) -> AppResult<Vec<EnrichedRow>> {
    TimesheetTransformer::default().transform(rows)
}

/// Shares are taken out of 100, or out of their sum when that is larger,
/// so a split never books more than the original duration. A plain
/// `pct / 100` split would book e.g. 120% of a row whose shares read
/// `Academy: 80% Helpdesk: 40%`; those rows are listed in
/// [`Diagnostics::over_allocated`].
fn share_divisor(shares: &Percentages) -> f64 {
    let total = shares.total();
    if total > 100 { total as f64 } else { 100.0 }
}

fn parse_duration(value: &str, line: usize) -> AppResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidDuration {
            line,
            value: value.to_string(),
        })
}

fn map_project(code: Option<&str>, diagnostics: &mut Diagnostics) -> Option<String> {
    let code = code.map(str::trim).filter(|c| !c.is_empty())?;

    match project_name(code) {
        Some(name) => Some(name.to_string()),
        None => {
            if !diagnostics.unmapped_projects.iter().any(|c| c == code) {
                diagnostics.unmapped_projects.push(code.to_string());
            }
            None
        }
    }
}
