// src/export/xlsx.rs

use crate::core::aggregate::{Summary, share_percent};
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATETIME_FORMAT, to_excel_serial};
use crate::export::model::{Cell, get_headers, row_cells};
use crate::export::notify_export_success;
use crate::models::EnrichedRow;
use crate::models::project::NO_PROJECT_LABEL;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: a "Zeiten" sheet with the rows and a "Summe" sheet with the
/// grouped sums.
pub(crate) fn export_xlsx(rows: &[EnrichedRow], summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Zeiten").map_err(to_app_error)?;
    write_rows(sheet, rows)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Summe").map_err(to_app_error)?;
    write_summary(sheet, summary)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", rows.len(), path);
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_rows(sheet: &mut Worksheet, rows: &[EnrichedRow]) -> AppResult<()> {
    let headers = get_headers();
    let hfmt = header_format();

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &hfmt)
            .map_err(to_app_error)?;
    }

    sheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (idx, r) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        let band = if idx % 2 == 0 { band1 } else { band2 };

        for (col, cell) in row_cells(r).iter().enumerate() {
            write_cell(sheet, row, col as u16, cell, band)?;
            col_widths[col] = col_widths[col].max(cell.display().width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Timestamp(t) => {
            let fmt = base.set_num_format(DATETIME_FORMAT);
            sheet
                .write_with_format(row, col, to_excel_serial(t), &fmt)
                .map_err(to_app_error)?;
        }
        Cell::Hours(h) => {
            let fmt = base.set_num_format("0.00").set_align(FormatAlign::Right);
            sheet
                .write_with_format(row, col, *h, &fmt)
                .map_err(to_app_error)?;
        }
        Cell::Text(s) => {
            sheet
                .write_with_format(row, col, s.as_str(), &base)
                .map_err(to_app_error)?;
        }
    }

    Ok(())
}

fn write_summary(sheet: &mut Worksheet, summary: &Summary) -> AppResult<()> {
    let hfmt = header_format();
    let hours = Format::new().set_num_format("0.00");
    let pct = Format::new().set_num_format("0.0\"%\"");

    sheet
        .write_with_format(0, 0, "Dauer insgesamt (in h)", &hfmt)
        .map_err(to_app_error)?;
    sheet
        .write_with_format(0, 1, summary.total, &hours)
        .map_err(to_app_error)?;

    let groups: [(&str, Vec<(String, f64)>); 3] = [
        (
            "Abteilung",
            summary
                .by_department
                .iter()
                .map(|g| (g.key.as_str().to_string(), g.dauer))
                .collect(),
        ),
        (
            "Projekt",
            summary
                .by_project
                .iter()
                .map(|g| (g.key.clone().unwrap_or_else(|| NO_PROJECT_LABEL.to_string()), g.dauer))
                .collect(),
        ),
        (
            "Meeting",
            summary
                .by_meeting
                .iter()
                .map(|g| (g.key.as_str().to_string(), g.dauer))
                .collect(),
        ),
    ];

    let mut row: u32 = 2;
    for (label, entries) in groups {
        for (col, h) in [label, "Dauer", "Anteil"].iter().enumerate() {
            sheet
                .write_with_format(row, col as u16, *h, &hfmt)
                .map_err(to_app_error)?;
        }
        row += 1;

        for (key, dauer) in entries {
            sheet.write(row, 0, key.as_str()).map_err(to_app_error)?;
            sheet
                .write_with_format(row, 1, dauer, &hours)
                .map_err(to_app_error)?;
            sheet
                .write_with_format(row, 2, share_percent(dauer, summary.total), &pct)
                .map_err(to_app_error)?;
            row += 1;
        }
        row += 1;
    }

    sheet.set_column_width(0, 34.0).map_err(to_app_error)?;
    sheet.set_column_width(1, 12.0).map_err(to_app_error)?;
    sheet.set_column_width(2, 10.0).map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
