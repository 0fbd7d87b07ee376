use super::*;

fn student(id: i64, first: &str, last: &str, email: &str, major: Option<&str>) -> Student {
    Student {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        major: major.map(str::to_owned),
    }
}

fn sample_roster() -> Vec<Student> {
    vec![
        student(1, "Ann", "Lee", "ann@example.com", Some("Physics")),
        student(2, "Bob", "Stone", "bob@uni.edu", None),
        student(3, "Carla", "Annesley", "carla@uni.edu", Some("History")),
    ]
}

#[test]
fn empty_term_matches_everything() {
    let roster = sample_roster();
    assert_eq!(filter_students(&roster, "").len(), 3);
}

#[test]
fn match_is_case_insensitive() {
    let roster = sample_roster();
    let filtered = filter_students(&roster, "ANN");
    assert_eq!(
        filtered.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn matches_against_email() {
    let roster = sample_roster();
    let filtered = filter_students(&roster, "uni.edu");
    assert_eq!(
        filtered.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
}

#[test]
fn matches_against_major_when_present() {
    let roster = sample_roster();
    let filtered = filter_students(&roster, "physics");
    assert_eq!(filtered.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn missing_major_is_skipped_without_panicking() {
    let roster = vec![student(9, "Zed", "Qu", "zed@example.com", None)];
    assert!(filter_students(&roster, "physics").is_empty());
    assert_eq!(filter_students(&roster, "zed").len(), 1);
}

#[test]
fn no_match_yields_empty_subsequence() {
    let roster = sample_roster();
    assert!(filter_students(&roster, "zzz").is_empty());
}

#[test]
fn filtering_preserves_roster_order_and_input() {
    let roster = sample_roster();
    let before = roster.clone();
    let filtered = filter_students(&roster, "a");
    assert_eq!(roster, before);
    let ids: Vec<_> = filtered.iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn roster_state_defaults_to_empty_and_idle() {
    let state = RosterState::default();
    assert!(state.students.is_empty());
    assert!(!state.loading);
}
