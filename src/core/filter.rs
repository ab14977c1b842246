//! Row filtering on the enriched table.

use crate::models::{Department, EnrichedRow, Meeting};
use crate::utils::date::{end_of_day, start_of_day};
use chrono::NaiveDate;

/// Filter criteria; `None` (or an empty string) means "do not filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of `Aufgabe`.
    pub task: Option<String>,
    /// Keep rows starting on or after this day.
    pub date_from: Option<NaiveDate>,
    /// Keep rows ending on or before the end of this day.
    pub date_to: Option<NaiveDate>,
    /// Exact project display name.
    pub project: Option<String>,
    pub meeting: Option<Meeting>,
    pub department: Option<Department>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.task_needle().is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.project_name().is_none()
            && self.meeting.is_none()
            && self.department.is_none()
    }

    pub fn matches(&self, row: &EnrichedRow) -> bool {
        if let Some(needle) = self.task_needle()
            && !row.aufgabe.trim().to_lowercase().contains(&needle)
        {
            return false;
        }

        if let Some(from) = self.date_from
            && row.von < start_of_day(from)
        {
            return false;
        }

        if let Some(to) = self.date_to
            && row.bis > end_of_day(to)
        {
            return false;
        }

        if let Some(project) = self.project_name()
            && row.projekt.as_deref() != Some(project)
        {
            return false;
        }

        if let Some(meeting) = self.meeting
            && row.meeting != meeting
        {
            return false;
        }

        if let Some(department) = self.department
            && row.abteilung != department
        {
            return false;
        }

        true
    }

    fn task_needle(&self) -> Option<String> {
        self.task
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    fn project_name(&self) -> Option<&str> {
        self.project.as_deref().filter(|p| !p.is_empty())
    }
}

/// Rows matching every present criterion, in input order.
pub fn apply_filter(rows: &[EnrichedRow], criteria: &FilterCriteria) -> Vec<EnrichedRow> {
    rows.iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}
