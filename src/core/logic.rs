use crate::core::aggregate::{Summary, summarize};
use crate::core::filter::{FilterCriteria, apply_filter};
use crate::core::transform::{Diagnostics, TimesheetTransformer};
use crate::errors::AppResult;
use crate::models::{EnrichedRow, RawRow};

/// Everything the presentation layer needs for one input file.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Number of rows after the split, before filtering.
    pub split_rows: usize,
    /// Filtered rows.
    pub rows: Vec<EnrichedRow>,
    pub summary: Summary,
    pub diagnostics: Diagnostics,
}

pub struct Core;

impl Core {
    /// transform → filter → aggregate
    pub fn build_report(
        transformer: &TimesheetTransformer,
        raw: &[RawRow],
        criteria: &FilterCriteria,
    ) -> AppResult<Report> {
        let transformed = transformer.transform_with_diagnostics(raw)?;
        let rows = apply_filter(&transformed.rows, criteria);
        let summary = summarize(&rows);

        Ok(Report {
            split_rows: transformed.rows.len(),
            rows,
            summary,
            diagnostics: transformed.diagnostics,
        })
    }
}
