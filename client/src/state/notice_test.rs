use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut s = NoticeState::default();
    let a = s.success("Saved");
    let b = s.error("Failed");
    assert!(b > a);
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut s = NoticeState::default();
    let a = s.success("one");
    let b = s.success("two");
    s.dismiss(a);
    assert_eq!(s.items.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    s.dismiss(999);
    assert_eq!(s.items.len(), 1);
}

#[test]
fn queue_is_capped_dropping_oldest() {
    let mut s = NoticeState::default();
    for i in 0..(MAX_NOTICES + 2) {
        s.error(format!("n{i}"));
    }
    assert_eq!(s.items.len(), MAX_NOTICES);
    assert_eq!(s.items[0].text, "n2");
}

#[test]
fn ids_stay_unique_after_dismiss() {
    let mut s = NoticeState::default();
    let a = s.success("a");
    s.dismiss(a);
    let b = s.success("b");
    assert_ne!(a, b);
}

#[test]
fn css_class_by_kind() {
    assert_eq!(NoticeKind::Success.css_class(), "notice notice--success");
    assert_eq!(NoticeKind::Error.css_class(), "notice notice--error");
}
