use chrono::NaiveDate;
use rtimesheet::core::aggregate::{share_percent, summarize};
use rtimesheet::core::filter::{FilterCriteria, apply_filter};
use rtimesheet::core::transform::transform;
use rtimesheet::models::{Department, EnrichedRow, Meeting, RawRow};

fn sample() -> Vec<EnrichedRow> {
    let rows = vec![
        RawRow::new("2025-03-03 09:00:00", "2025-03-03 19:00:00", "10")
            .with_description("Academy: 30% Helpdesk: 70% Meeting: Nein")
            .with_project("PLAN")
            .with_task("  Doku schreiben "),
        RawRow::new("2025-03-04 08:00:00", "2025-03-04 13:00:00", "5")
            .with_description("Academy: 100% Meeting: Ja")
            .with_project("AV")
            .with_task("Video schneiden"),
        RawRow::new("2025-03-05 10:00:00", "2025-03-05 23:59:30", "2")
            .with_description("Helpdesk: 50%")
            .with_project("XX")
            .with_task("Tickets"),
        RawRow::new("2025-03-06 09:00:00", "2025-03-06 11:00:00", "2")
            .with_description("Helpdesk: 100%")
            .with_project("HT"),
    ];
    transform(&rows).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_empty_criteria_keep_everything() {
    let rows = sample();
    let criteria = FilterCriteria::default();
    assert!(criteria.is_empty());
    assert_eq!(apply_filter(&rows, &criteria), rows);
}

#[test]
fn test_department_filter_total_matches() {
    let rows = sample();
    let criteria = FilterCriteria {
        department: Some(Department::Academy),
        ..Default::default()
    };

    let filtered = apply_filter(&rows, &criteria);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.abteilung == Department::Academy));

    let summary = summarize(&filtered);
    let sum: f64 = filtered.iter().map(|r| r.dauer).sum();
    assert!((summary.total - sum).abs() < 1e-9);
    assert_eq!(summary.total, 8.0);
}

#[test]
fn test_task_filter_is_trimmed_and_case_insensitive() {
    let rows = sample();
    let criteria = FilterCriteria {
        task: Some(" DOKU ".to_string()),
        ..Default::default()
    };

    let filtered = apply_filter(&rows, &criteria);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.aufgabe.contains("Doku")));
}

#[test]
fn test_task_filter_never_matches_missing_task() {
    let rows = sample();
    let criteria = FilterCriteria {
        task: Some("t".to_string()),
        ..Default::default()
    };

    let filtered = apply_filter(&rows, &criteria);
    assert!(filtered.iter().all(|r| !r.aufgabe.is_empty()));
}

#[test]
fn test_blank_filters_are_ignored() {
    let rows = sample();
    let criteria = FilterCriteria {
        task: Some("   ".to_string()),
        project: Some(String::new()),
        ..Default::default()
    };
    assert!(criteria.is_empty());
    assert_eq!(apply_filter(&rows, &criteria).len(), rows.len());
}

#[test]
fn test_date_range_is_inclusive() {
    let rows = sample();
    let criteria = FilterCriteria {
        date_from: day(2025, 3, 4),
        date_to: day(2025, 3, 5),
        ..Default::default()
    };

    let filtered = apply_filter(&rows, &criteria);
    let days: Vec<String> = filtered.iter().map(|r| r.von.date().to_string()).collect();
    assert_eq!(days, vec!["2025-03-04", "2025-03-05"]);
}

#[test]
fn test_project_filter_is_exact_and_skips_unmapped() {
    let rows = sample();
    let criteria = FilterCriteria {
        project: Some("Academy Videos".to_string()),
        ..Default::default()
    };
    let filtered = apply_filter(&rows, &criteria);
    assert_eq!(filtered.len(), 1);

    let criteria = FilterCriteria {
        project: Some("academy videos".to_string()),
        ..Default::default()
    };
    assert!(apply_filter(&rows, &criteria).is_empty());
}

#[test]
fn test_meeting_filter() {
    let rows = sample();
    let criteria = FilterCriteria {
        meeting: Some(Meeting::Nein),
        ..Default::default()
    };
    let filtered = apply_filter(&rows, &criteria);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.meeting == Meeting::Nein));
}

#[test]
fn test_grouped_sums() {
    let summary = summarize(&sample());

    assert_eq!(summary.rows, 5);
    assert_eq!(summary.total, 18.0);

    let departments: Vec<(Department, f64)> = summary
        .by_department
        .iter()
        .map(|g| (g.key, g.dauer))
        .collect();
    assert_eq!(
        departments,
        vec![(Department::Academy, 8.0), (Department::Helpdesk, 10.0)]
    );

    // unmapped project first, then by name
    let projects: Vec<(Option<&str>, f64)> = summary
        .by_project
        .iter()
        .map(|g| (g.key.as_deref(), g.dauer))
        .collect();
    assert_eq!(
        projects,
        vec![
            (None, 1.0),
            (Some("Academy Videos"), 5.0),
            (Some("Helpdesk Tasks"), 2.0),
            (Some("Planung & Dokumentation"), 10.0),
        ]
    );

    let meetings: Vec<(&str, f64)> = summary
        .by_meeting
        .iter()
        .map(|g| (g.key.as_str(), g.dauer))
        .collect();
    assert_eq!(meetings, vec![("", 3.0), ("Ja", 5.0), ("Nein", 10.0)]);
}

#[test]
fn test_empty_summary() {
    let summary = summarize(&[]);
    assert!(summary.is_empty());
    assert_eq!(summary.total, 0.0);
    assert!(summary.by_department.is_empty());
    assert!(summary.by_project.is_empty());
    assert!(summary.by_meeting.is_empty());
    assert_eq!(share_percent(1.0, 0.0), 0.0);
}
