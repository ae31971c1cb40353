use super::*;
use crate::test_support::user;

fn stored_user(role: Role) -> String {
    serde_json::to_string(&user(role)).expect("ser")
}

// =============================================================
// Restore
// =============================================================

#[test]
fn default_is_logged_out() {
    let s = SessionState::default();
    assert!(!s.is_logged_in());
    assert!(s.user().is_none());
    assert!(s.role().is_none());
}

#[test]
fn restore_with_flag_and_record_logs_in() {
    let raw = stored_user(Role::Admin);
    let s = SessionState::restore(Some("true"), Some(&raw));
    assert!(s.is_logged_in());
    assert_eq!(s.user(), Some(&user(Role::Admin)));
    assert!(s.is_admin());
}

#[test]
fn restore_treats_undefined_record_as_logged_out() {
    let s = SessionState::restore(Some("true"), Some("undefined"));
    assert!(!s.is_logged_in());
}

#[test]
fn restore_rejects_malformed_record() {
    let s = SessionState::restore(Some("true"), Some("{not json"));
    assert_eq!(s, SessionState::default());
}

#[test]
fn restore_requires_flag() {
    let raw = stored_user(Role::User);
    assert!(!SessionState::restore(None, Some(&raw)).is_logged_in());
    assert!(!SessionState::restore(Some("false"), Some(&raw)).is_logged_in());
}

#[test]
fn restore_with_flag_but_no_record_is_logged_out() {
    assert!(!SessionState::restore(Some("true"), None).is_logged_in());
}

#[test]
fn load_off_browser_is_logged_out() {
    assert!(!SessionState::load().is_logged_in());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn log_in_sets_flag_and_user() {
    let mut s = SessionState::default();
    s.log_in(user(Role::User));
    assert!(s.is_logged_in());
    assert_eq!(s.role(), Some(Role::User));
    assert!(!s.is_admin());
}

#[test]
fn log_out_always_clears() {
    let mut s = SessionState::default();
    s.log_out();
    assert_eq!(s, SessionState::default());

    s.log_in(user(Role::Hr));
    s.log_out();
    assert!(!s.is_logged_in());
    assert!(s.user().is_none());
    assert!(s.storage_entries().is_none());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn storage_entries_round_trip_through_restore() {
    let mut s = SessionState::default();
    s.log_in(user(Role::Teamlead));
    let entries = s.storage_entries().expect("entries");

    let flag = entries.iter().find(|(k, _)| *k == LOGGED_IN_KEY).map(|(_, v)| v.as_str());
    let data = entries.iter().find(|(k, _)| *k == USER_KEY).map(|(_, v)| v.as_str());
    assert_eq!(flag, Some("true"));
    assert_eq!(SessionState::restore(flag, data), s);
}

#[test]
fn storage_keys_match_browser_contract() {
    assert_eq!(LOGGED_IN_KEY, "isLoggedIn");
    assert_eq!(USER_KEY, "data");
}

#[test]
fn persist_is_noop_off_browser() {
    let mut s = SessionState::default();
    s.log_in(user(Role::User));
    s.persist();
    SessionState::default().persist();
}
