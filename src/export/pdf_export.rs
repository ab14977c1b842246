// src/export/pdf_export.rs

use crate::core::aggregate::{Summary, share_percent};
use crate::errors::AppResult;
use crate::export::model::{get_headers, rows_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::ReportPdf;
use crate::models::EnrichedRow;
use crate::models::project::NO_PROJECT_LABEL;
use crate::ui::messages::info;
use crate::utils::formatting::{format_hours, format_percent};
use std::fs;
use std::path::Path;

/// Export PDF: total and grouped sums on top, then the row table.
pub(crate) fn export_pdf(
    rows: &[EnrichedRow],
    summary: &Summary,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = ReportPdf::new();
    pdf.write_report(title, &summary_lines(summary), &get_headers(), &rows_to_table(rows));
    fs::write(path, pdf.finish())?;

    notify_export_success("PDF", rows.len(), path);
    Ok(())
}

fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![format!("Dauer insgesamt (in h): {}", format_hours(summary.total))];

    let part = |label: &str, dauer: f64| {
        format!(
            "{label} {} ({})",
            format_hours(dauer),
            format_percent(share_percent(dauer, summary.total))
        )
    };

    let departments: Vec<String> = summary
        .by_department
        .iter()
        .map(|g| part(g.key.as_str(), g.dauer))
        .collect();
    lines.push(format!("Abteilung: {}", departments.join(" | ")));

    let meetings: Vec<String> = summary
        .by_meeting
        .iter()
        .map(|g| part(if g.key.as_str().is_empty() { "-" } else { g.key.as_str() }, g.dauer))
        .collect();
    lines.push(format!("Meeting: {}", meetings.join(" | ")));

    for g in &summary.by_project {
        lines.push(part(
            &format!("Projekt {}:", g.key.as_deref().unwrap_or(NO_PROJECT_LABEL)),
            g.dauer,
        ));
    }

    lines
}
