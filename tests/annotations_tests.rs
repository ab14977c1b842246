use rtimesheet::core::annotations::{Percentages, meeting_status, percentage, percentages};
use rtimesheet::models::{Department, Meeting};

#[test]
fn test_meeting_ja_nein_wins_over_ja() {
    assert_eq!(meeting_status(Some("Meeting: Ja Nein")), Meeting::Nein);
}

#[test]
fn test_meeting_markers() {
    assert_eq!(meeting_status(Some("Weekly, Meeting: Ja")), Meeting::Ja);
    assert_eq!(meeting_status(Some("Meeting: Nein")), Meeting::Nein);
    assert_eq!(meeting_status(Some("Meeting:  Nein")), Meeting::Nein);
    assert_eq!(meeting_status(Some("Academy: 50%")), Meeting::Unset);
    assert_eq!(meeting_status(Some("")), Meeting::Unset);
    assert_eq!(meeting_status(None), Meeting::Unset);
}

#[test]
fn test_meeting_marker_is_case_sensitive() {
    assert_eq!(meeting_status(Some("meeting: ja")), Meeting::Unset);
    assert_eq!(Meeting::Unset.as_str(), "");
}

#[test]
fn test_percentages_both_present() {
    let p = percentages(Some("Academy: 30% Helpdesk: 70%")).unwrap();
    assert_eq!(
        p,
        Percentages {
            academy: 30,
            helpdesk: 70
        }
    );
    assert_eq!(p.total(), 100);
    assert!(!p.is_empty());
}

#[test]
fn test_percentages_first_match_wins() {
    let text = "Helpdesk: 20% später korrigiert auf Helpdesk: 80%";
    assert_eq!(percentage(Some(text), Department::Helpdesk), Ok(20));
}

#[test]
fn test_percentages_absent_or_malformed_are_zero() {
    assert!(percentages(None).unwrap().is_empty());
    assert!(percentages(Some("Academy:30%")).unwrap().is_empty());
    assert!(percentages(Some("Academy: %")).unwrap().is_empty());
    assert!(percentages(Some("academy: 30%")).unwrap().is_empty());
}

#[test]
fn test_percentage_overflow_is_reported() {
    let err = percentage(Some("Academy: 99999999999%"), Department::Academy).unwrap_err();
    assert_eq!(err, "99999999999");
}
