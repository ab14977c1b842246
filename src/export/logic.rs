// src/export/logic.rs

use crate::core::Report;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RowExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export of a filtered report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the rows of `report` to `path` in `format`.
    ///
    /// Returns `false` without touching the file when there is nothing to
    /// export.
    pub fn export(
        report: &Report,
        format: ExportFormat,
        path: &Path,
        force: bool,
        title: &str,
    ) -> AppResult<bool> {
        if report.rows.is_empty() {
            warning("No rows match the selected filters, nothing exported.");
            return Ok(false);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&flat_rows(report), path)?,
            ExportFormat::Json => export_json(&flat_rows(report), path)?,
            ExportFormat::Xlsx => export_xlsx(&report.rows, &report.summary, path)?,
            ExportFormat::Pdf => export_pdf(&report.rows, &report.summary, path, title)?,
        }

        Ok(true)
    }
}

fn flat_rows(report: &Report) -> Vec<RowExport> {
    report.rows.iter().map(RowExport::from).collect()
}
