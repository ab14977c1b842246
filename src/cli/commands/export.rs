use crate::cli::commands::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
        filters,
    } = cmd
    {
        let report = load_report(input, filters, cfg)?;
        let out = expand_tilde(file);
        let title = build_title(input, filters.period.as_deref());
        ExportLogic::export(&report, *format, &out, *force, &title)?;
    }
    Ok(())
}

/// PDF title from the input file name and the selected period.
fn build_title(input: &str, period: Option<&str>) -> String {
    let name = Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| input.to_string());

    match period {
        Some(p) => match p.split_once(':') {
            Some((start, end)) => format!("Zeiterfassung {name}: {start} bis {end}"),
            None => format!("Zeiterfassung {name}: {p}"),
        },
        None => format!("Zeiterfassung {name}"),
    }
}
