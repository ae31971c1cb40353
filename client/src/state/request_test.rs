use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(RequestStatus::default(), RequestStatus::Idle);
    assert_eq!(RequestStatus::default().tag(), "idle");
}

#[test]
fn error_only_present_when_failed() {
    assert_eq!(RequestStatus::Loading.error(), None);
    assert_eq!(RequestStatus::Succeeded.error(), None);
    assert_eq!(RequestStatus::Failed("boom".to_owned()).error(), Some("boom"));
}

#[test]
fn predicates_match_variants() {
    assert!(RequestStatus::Loading.is_loading());
    assert!(!RequestStatus::Idle.is_loading());
    assert!(RequestStatus::Succeeded.is_succeeded());
    assert_eq!(RequestStatus::Failed(String::new()).tag(), "failed");
}
