#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Timesheet export with every kind of row the pipeline cares about.
pub const SAMPLE_CSV: &str = "\
Von,Bis,Beschreibung,Projekt,Aufgabe,Dauer
2025-03-03 09:00:00,2025-03-03 19:00:00,Academy: 30% Helpdesk: 70% Meeting: Nein,PLAN,Doku schreiben,10
2025-03-04 08:00:00,2025-03-04 13:00:00,Academy: 100% Meeting: Ja,AV,Video schneiden,5
2025-03-05 10:00:00,2025-03-05 12:00:00,Helpdesk: 50%,XX,Tickets,2
2025-03-06 09:00:00,2025-03-06 10:00:00,nur Notizen,HT,Tickets,1
2025-04-01 09:00:00,2025-04-01 11:00:00,Helpdesk: 100% Meeting: Ja Nein,MEET,Weekly,2
";

pub fn rts() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Path inside the system temp dir, any previous file removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp CSV file and return its path.
pub fn write_csv(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// Fresh config path for a test; the file itself does not exist.
pub fn test_config(name: &str) -> String {
    temp_path(name, "conf")
}
