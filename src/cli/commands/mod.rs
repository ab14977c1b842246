pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::cli::filters::FilterArgs;
use crate::config::Config;
use crate::core::{Core, Report, TimesheetTransformer};
use crate::core::transform::Diagnostics;
use crate::errors::AppResult;
use crate::import::read_timesheet;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;

/// Read, transform, filter and aggregate one input file.
pub(crate) fn load_report(input: &str, filters: &FilterArgs, cfg: &Config) -> AppResult<Report> {
    let criteria = filters.to_criteria()?;
    let path = expand_tilde(input);

    let raw = read_timesheet(&path, cfg.delimiter()?)?;
    info(format!("Read {} rows from {}", raw.len(), path.display()));

    let transformer = TimesheetTransformer::new(cfg.extra_timestamp_formats.clone());
    let report = Core::build_report(&transformer, &raw, &criteria)?;

    if !report.diagnostics.is_clean() {
        report_diagnostics(&report.diagnostics);
    }

    if !criteria.is_empty() {
        info(format!(
            "{} of {} split rows match the filters",
            report.rows.len(),
            report.split_rows
        ));
    }

    Ok(report)
}

fn report_diagnostics(d: &Diagnostics) {
    if !d.dropped.is_empty() {
        warning(format!(
            "{} row(s) without 'Academy: N%' or 'Helpdesk: N%' were skipped (lines {})",
            d.dropped.len(),
            join_lines(&d.dropped)
        ));
    }

    if !d.unmapped_projects.is_empty() {
        warning(format!(
            "Unknown project code(s) left without project: {}",
            d.unmapped_projects.join(", ")
        ));
    }

    if !d.over_allocated.is_empty() {
        warning(format!(
            "Shares above 100% were scaled down (lines {})",
            join_lines(&d.over_allocated)
        ));
    }
}

fn join_lines(lines: &[usize]) -> String {
    const SHOWN: usize = 10;
    let mut s: Vec<String> = lines.iter().take(SHOWN).map(|l| l.to_string()).collect();
    if lines.len() > SHOWN {
        s.push("...".to_string());
    }
    s.join(", ")
}
