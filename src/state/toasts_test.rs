use super::*;

#[test]
fn push_assigns_fresh_increasing_ids() {
    let mut state = ToastsState::default();
    let a = state.push(ToastKind::Success, "saved".to_owned());
    let b = state.push(ToastKind::Error, "failed".to_owned());
    assert!(b > a);
    assert_eq!(state.items().len(), 2);
}

#[test]
fn concurrent_pushes_stay_independent() {
    let mut state = ToastsState::default();
    for i in 0..10 {
        state.push(ToastKind::Error, format!("failure {i}"));
    }
    assert_eq!(state.items().len(), 10);
}

#[test]
fn dismiss_removes_only_its_target() {
    let mut state = ToastsState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    let b = state.push(ToastKind::Success, "two".to_owned());
    state.dismiss(a);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, b);
}

#[test]
fn dismiss_of_unknown_id_is_a_noop() {
    let mut state = ToastsState::default();
    state.push(ToastKind::Success, "one".to_owned());
    state.dismiss(999);
    assert_eq!(state.items().len(), 1);
}

#[test]
fn mark_leaving_flags_only_its_target() {
    let mut state = ToastsState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    let _b = state.push(ToastKind::Success, "two".to_owned());
    state.mark_leaving(a);
    assert!(state.items()[0].leaving);
    assert!(!state.items()[1].leaving);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastsState::default();
    let a = state.push(ToastKind::Success, "one".to_owned());
    state.dismiss(a);
    let b = state.push(ToastKind::Success, "two".to_owned());
    assert!(b > a);
}

#[test]
fn kinds_are_distinct() {
    assert_ne!(ToastKind::Success, ToastKind::Error);
}
