use super::*;
use crate::test_support::employee;

fn loaded(ids: &[&str]) -> EmployeesState {
    let mut state = EmployeesState::default();
    state.apply_list(ids.iter().map(|id| employee(id, &format!("Name {id}"), "2022-01-01")).collect());
    state
}

fn ids(state: &EmployeesState) -> Vec<&str> {
    state.items.iter().map(|e| e.id.as_str()).collect()
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn defaults_are_empty_and_idle() {
    let s = EmployeesState::default();
    assert!(s.items.is_empty());
    assert!(s.current.is_none());
    assert_eq!(s.status, RequestStatus::Idle);
}

#[test]
fn begin_clears_previous_error() {
    let mut s = EmployeesState::default();
    s.fail("Not found");
    assert_eq!(s.status.error(), Some("Not found"));
    s.begin();
    assert_eq!(s.status, RequestStatus::Loading);
    assert_eq!(s.status.error(), None);
}

#[test]
fn fail_keeps_existing_data() {
    let mut s = loaded(&["a", "b"]);
    s.begin();
    s.fail("Server down");
    assert_eq!(ids(&s), vec!["a", "b"]);
    assert_eq!(s.status, RequestStatus::Failed("Server down".to_owned()));
}

// =============================================================
// Create
// =============================================================

#[test]
fn manual_create_appends_exactly_one() {
    let mut s = loaded(&["a", "b"]);
    s.begin();
    s.apply_created(vec![employee("c", "Carol", "2023-05-05")]);
    assert_eq!(ids(&s), vec!["a", "b", "c"]);
    assert!(s.status.is_succeeded());
}

#[test]
fn bulk_create_appends_all_returned() {
    let mut s = loaded(&["a"]);
    s.apply_created(vec![
        employee("b", "Bo", "2023-01-01"),
        employee("c", "Cy", "2023-01-02"),
        employee("d", "Di", "2023-01-03"),
    ]);
    assert_eq!(ids(&s), vec!["a", "b", "c", "d"]);
}

#[test]
fn bulk_create_with_no_records_still_succeeds() {
    let mut s = loaded(&["a"]);
    s.begin();
    s.apply_created(Vec::new());
    assert_eq!(ids(&s), vec!["a"]);
    assert!(s.status.is_succeeded());
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn list_fetch_replaces_wholesale() {
    let mut s = loaded(&["a", "b", "c"]);
    s.apply_list(vec![employee("z", "Zed", "2020-02-02")]);
    assert_eq!(ids(&s), vec!["z"]);
}

#[test]
fn single_fetch_sets_current_only() {
    let mut s = loaded(&["a"]);
    s.apply_current(employee("q", "Quinn", "2021-03-03"));
    assert_eq!(s.current.as_ref().map(|e| e.id.as_str()), Some("q"));
    assert_eq!(ids(&s), vec!["a"]);
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_replaces_matching_record_and_current() {
    let mut s = loaded(&["a", "b", "c"]);
    let before_a = s.items[0].clone();
    let before_c = s.items[2].clone();

    let mut updated = employee("b", "Bea Renamed", "2022-01-01");
    updated.fields.employment_info.job_title = "Lead".to_owned();
    s.apply_updated(updated.clone());

    assert_eq!(s.items[1], updated);
    assert_eq!(s.items[0], before_a);
    assert_eq!(s.items[2], before_c);
    assert_eq!(s.current, Some(updated));
}

#[test]
fn update_of_unlisted_record_sets_current_without_insert() {
    let mut s = loaded(&["a"]);
    s.apply_updated(employee("x", "Xavi", "2022-01-01"));
    assert_eq!(ids(&s), vec!["a"]);
    assert_eq!(s.current.as_ref().map(|e| e.id.as_str()), Some("x"));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_exactly_that_record() {
    let mut s = loaded(&["a", "b", "c"]);
    s.apply_deleted("b");
    assert_eq!(ids(&s), vec!["a", "c"]);
    assert!(s.status.is_succeeded());
}

#[test]
fn delete_clears_matching_current() {
    let mut s = loaded(&["a", "b"]);
    s.apply_current(employee("b", "Name b", "2022-01-01"));
    s.apply_deleted("b");
    assert!(s.current.is_none());
}

#[test]
fn delete_keeps_unrelated_current() {
    let mut s = loaded(&["a", "b"]);
    s.apply_current(employee("a", "Name a", "2022-01-01"));
    s.apply_deleted("b");
    assert_eq!(s.current.as_ref().map(|e| e.id.as_str()), Some("a"));
}

#[test]
fn delete_unknown_id_is_noop_on_list() {
    let mut s = loaded(&["a"]);
    s.apply_deleted("missing");
    assert_eq!(ids(&s), vec!["a"]);
}

#[test]
fn clear_resets_everything() {
    let mut s = loaded(&["a"]);
    s.apply_current(employee("a", "Name a", "2022-01-01"));
    s.clear();
    assert_eq!(s, EmployeesState::default());
    assert!(s.find("a").is_none());
}
