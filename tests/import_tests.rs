mod common;

use common::{SAMPLE_CSV, write_csv};
use rtimesheet::errors::AppError;
use rtimesheet::import::{Delimiter, decode_content, detect_delimiter, read_timesheet, read_timesheet_bytes};
use std::path::Path;

#[test]
fn test_read_sample_file() {
    let path = write_csv("import_sample", SAMPLE_CSV);
    let rows = read_timesheet(Path::new(&path), Delimiter::Auto).expect("read sample");

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].projekt.as_deref(), Some("PLAN"));
    assert_eq!(rows[0].dauer, "10");
    assert_eq!(rows[3].beschreibung.as_deref(), Some("nur Notizen"));
    assert_eq!(rows[4].line, 6);
}

#[test]
fn test_semicolon_and_extra_columns() {
    let csv = "Benutzer;Von;Bis;Beschreibung;Projekt;Aufgabe;Dauer;Kunde\n\
               anna;2025-03-03 09:00;2025-03-03 10:00;Academy: 100%;AT;Kurs;1,0;ACME\n";
    let rows = read_timesheet_bytes(csv.as_bytes(), Delimiter::Auto).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].aufgabe.as_deref(), Some("Kurs"));
    assert_eq!(rows[0].dauer, "1,0");
}

#[test]
fn test_empty_cells_are_absent() {
    let csv = "Von,Bis,Beschreibung,Projekt,Aufgabe,Dauer\n2025-03-03,2025-03-03,,,,1\n";
    let rows = read_timesheet_bytes(csv.as_bytes(), Delimiter::Auto).unwrap();

    assert_eq!(rows[0].beschreibung, None);
    assert_eq!(rows[0].projekt, None);
    assert_eq!(rows[0].aufgabe, None);
}

#[test]
fn test_quoted_multiline_description_keeps_line_numbers() {
    let csv = "Von,Bis,Beschreibung,Projekt,Aufgabe,Dauer\n\
               2025-03-03,2025-03-03,\"Zeile eins\nAcademy: 50%\",AT,A,1\n\
               2025-03-04,2025-03-04,Helpdesk: 100%,HT,B,1\n";
    let rows = read_timesheet_bytes(csv.as_bytes(), Delimiter::Auto).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[1].line, 4);
    assert!(rows[0].beschreibung.as_deref().unwrap().contains("Academy: 50%"));
}

#[test]
fn test_missing_columns_are_reported() {
    let csv = "Von,Bis,Projekt,Dauer\n2025-03-03,2025-03-03,AT,1\n";
    match read_timesheet_bytes(csv.as_bytes(), Delimiter::Auto) {
        Err(AppError::MissingColumns(cols)) => assert_eq!(cols, vec!["Beschreibung", "Aufgabe"]),
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn test_empty_input_misses_all_columns() {
    let err = read_timesheet_bytes(b"", Delimiter::Auto).unwrap_err();
    assert!(matches!(err, AppError::MissingColumns(ref c) if c.len() == 6));
}

#[test]
fn test_bom_and_windows_1252() {
    let mut bytes = b"\xEF\xBB\xBFVon,Bis,Beschreibung,Projekt,Aufgabe,Dauer\n".to_vec();
    bytes.extend_from_slice(b"2025-03-03,2025-03-03,Academy: 100%,AT,Pr\xfcfung,1\n");

    // BOM plus an invalid UTF-8 byte: decoded as Windows-1252
    let rows = read_timesheet_bytes(&bytes, Delimiter::Auto).unwrap();
    assert_eq!(rows[0].von, "2025-03-03");
    assert_eq!(rows[0].aufgabe.as_deref(), Some("Prüfung"));
}

#[test]
fn test_decode_content_prefers_utf8() {
    assert_eq!(decode_content("Prüfung".as_bytes()), "Prüfung");
    assert_eq!(decode_content(b"\xEF\xBB\xBFabc"), "abc");
}

#[test]
fn test_detect_delimiter() {
    assert_eq!(detect_delimiter("a;b;c\n1,2;3"), b';');
    assert_eq!(detect_delimiter("a\tb\tc"), b'\t');
    assert_eq!(detect_delimiter("a|b|c"), b'|');
    assert_eq!(detect_delimiter("single"), b',');
    assert_eq!(detect_delimiter(""), b',');
}

#[test]
fn test_delimiter_parse() {
    assert_eq!(Delimiter::parse("auto").unwrap(), Delimiter::Auto);
    assert_eq!(Delimiter::parse(";").unwrap(), Delimiter::Byte(b';'));
    assert_eq!(Delimiter::parse("tab").unwrap(), Delimiter::Byte(b'\t'));
    assert!(Delimiter::parse(";;").is_err());
    assert!(Delimiter::parse("§").is_err());
}

#[test]
fn test_explicit_pipe_delimiter() {
    let csv = "Von|Bis|Beschreibung|Projekt|Aufgabe|Dauer\n2025-03-03|2025-03-03|Academy: 1%, Helpdesk: 2%|AT|A|1\n";
    let rows = read_timesheet_bytes(csv.as_bytes(), Delimiter::Byte(b'|')).unwrap();
    assert_eq!(
        rows[0].beschreibung.as_deref(),
        Some("Academy: 1%, Helpdesk: 2%")
    );
}
