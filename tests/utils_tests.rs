use chrono::NaiveDate;
use rtimesheet::config::Config;
use rtimesheet::models::project::{project_name, resolve_project_arg};
use rtimesheet::utils::date::{end_of_day, parse_range};
use rtimesheet::utils::formatting::{bar, format_hours, round2};
use rtimesheet::utils::table::{Column, Table};
use std::env;
use std::fs;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_parse_range_shapes() {
    assert_eq!(parse_range("2024").unwrap(), (d(2024, 1, 1), d(2024, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2025-02").unwrap(), (d(2025, 2, 1), d(2025, 2, 28)));
    assert_eq!(parse_range("2025-12").unwrap(), (d(2025, 12, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2025-03-04").unwrap(), (d(2025, 3, 4), d(2025, 3, 4)));
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
    assert_eq!(
        parse_range("2024:2025").unwrap(),
        (d(2024, 1, 1), d(2025, 12, 31))
    );
}

#[test]
fn test_parse_range_errors() {
    assert!(parse_range("2025-01:2025").is_err());
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025-03-10:2025-03-01").is_err());
    assert!(parse_range("letzte Woche").is_err());
}

#[test]
fn test_end_of_day() {
    assert_eq!(end_of_day(d(2025, 3, 4)).to_string(), "2025-03-04 23:59:59");
}

#[test]
fn test_project_table() {
    assert_eq!(project_name("PLAN"), Some("Planung & Dokumentation"));
    assert_eq!(project_name("MEET"), Some("Meetings: Daily & Weekly & POs"));
    assert_eq!(project_name("XX"), None);
    assert_eq!(project_name("plan"), None);
    assert_eq!(project_name(" PLAN "), Some("Planung & Dokumentation"));
    assert_eq!(resolve_project_arg("HA"), "Helpdesk Artikel");
    assert_eq!(resolve_project_arg("Academy Tasks"), "Academy Tasks");
}

#[test]
fn test_formatting() {
    assert_eq!(round2(0.1 + 0.2), 0.3);
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(format_hours(7.5), "7.50");
    assert_eq!(bar(50.0, 10), "█████");
    assert_eq!(bar(150.0, 4), "████");
    assert_eq!(bar(0.0, 4), "");
}

#[test]
fn test_table_alignment() {
    let mut table = Table::new(vec![Column::left("Name"), Column::right("h")]);
    table.add_row(vec!["Prüfung".to_string(), "1.00".to_string()]);
    table.add_row(vec!["A".to_string(), "10.50".to_string()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "Name        h");
    assert_eq!(lines[2], "Prüfung  1.00");
    assert_eq!(lines[3], "A       10.50");
}

#[test]
fn test_config_defaults_and_partial_file() {
    let mut path = env::temp_dir();
    path.push("config_partial_rtimesheet.conf");
    fs::write(&path, "bar_width: 12\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.bar_width, 12);
    assert_eq!(cfg.delimiter, "auto");
    assert_eq!(cfg.display_datetime_format, "%d-%m-%y %H:%M");

    path.set_file_name("config_missing_rtimesheet.conf");
    fs::remove_file(&path).ok();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_roundtrip_and_validation() {
    let mut path = env::temp_dir();
    path.push("config_roundtrip_rtimesheet.conf");

    let cfg = Config {
        delimiter: ";".to_string(),
        extra_timestamp_formats: vec!["%d|%m|%Y %H:%M".to_string()],
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), cfg);

    fs::write(&path, "display_datetime_format: \"%Q\"\n").unwrap();
    assert!(Config::load_from(&path).is_err());

    fs::write(&path, "bar_width: [1, 2]\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}
