use crate::cli::commands::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Report;
use crate::core::aggregate::{GroupSum, share_percent};
use crate::errors::AppResult;
use crate::models::EnrichedRow;
use crate::models::project::NO_PROJECT_LABEL;
use crate::ui::messages::{header, no_data};
use crate::utils::colors::{color_for_department, color_for_meeting, paint};
use crate::utils::formatting::{bar, format_hours, format_percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        filters,
        rows,
    } = cmd
    {
        let report = load_report(input, filters, cfg)?;
        print_report(&report, *rows, cfg);
    }
    Ok(())
}

fn print_report(report: &Report, with_rows: bool, cfg: &Config) {
    if with_rows {
        header("Zeiten");
        if report.rows.is_empty() {
            println!("No rows.");
        } else {
            print!("{}", rows_table(&report.rows, &cfg.display_datetime_format).render());
        }
    }

    let summary = &report.summary;

    header(format!("Dauer insgesamt (in h): {}", format_hours(summary.total)));

    print_groups(
        "Helpdesk & Academy",
        &summary.by_department,
        summary.total,
        cfg.bar_width,
        |k| (k.as_str().to_string(), Some(color_for_department(*k))),
    );
    print_groups("Projekte", &summary.by_project, summary.total, cfg.bar_width, |k| {
        (k.clone().unwrap_or_else(|| NO_PROJECT_LABEL.to_string()), None)
    });
    print_groups(
        "Meeting Status",
        &summary.by_meeting,
        summary.total,
        cfg.bar_width,
        |k| {
            let label = if k.as_str().is_empty() { "(ohne)" } else { k.as_str() };
            (label.to_string(), Some(color_for_meeting(*k)))
        },
    );
}

fn rows_table(rows: &[EnrichedRow], datetime_format: &str) -> Table {
    let mut table = Table::new(vec![
        Column::left("Von"),
        Column::left("Bis"),
        Column::left("Projekt"),
        Column::left("Aufgabe"),
        Column::right("Dauer"),
        Column::left("Meeting"),
        Column::left("Abteilung"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.von.format(datetime_format).to_string(),
            r.bis.format(datetime_format).to_string(),
            r.project_str().to_string(),
            r.aufgabe.clone(),
            format_hours(r.dauer),
            r.meeting.as_str().to_string(),
            r.abteilung.as_str().to_string(),
        ]);
    }

    table
}

/// Grouped sums as a table with share and bar; labels may be coloured.
fn print_groups<K>(
    title: &str,
    groups: &[GroupSum<K>],
    total: f64,
    bar_width: usize,
    label: impl Fn(&K) -> (String, Option<&'static str>),
) {
    header(title);

    if groups.is_empty() {
        no_data(title);
        return;
    }

    let labels: Vec<(String, Option<&'static str>)> = groups.iter().map(|g| label(&g.key)).collect();

    let mut table = Table::new(vec![
        Column::left(""),
        Column::right("Dauer"),
        Column::right("Anteil"),
        Column::left(""),
    ]);

    for (g, (text, _)) in groups.iter().zip(&labels) {
        let share = share_percent(g.dauer, total);
        table.add_row(vec![
            text.clone(),
            format_hours(g.dauer),
            format_percent(share),
            bar(share, bar_width),
        ]);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();

    // header and rule stay uncoloured
    for line in lines.by_ref().take(2) {
        println!("{line}");
    }

    // each row starts with its plain label; swap in the painted one
    for (line, (text, color)) in lines.zip(&labels) {
        match color {
            Some(c) => println!("{}{}", paint(text, c), &line[text.len()..]),
            None => println!("{line}"),
        }
    }
}
