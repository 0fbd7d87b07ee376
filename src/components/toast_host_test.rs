use super::*;

#[test]
fn notify_without_a_provider_is_a_silent_noop() {
    notify(None, ToastKind::Success, "saved");
    notify_success(None, "saved");
    notify_error(None, "failed");
}

#[test]
fn toast_class_encodes_kind() {
    assert_eq!(toast_class(ToastKind::Success, false), "toast toast--success");
    assert_eq!(toast_class(ToastKind::Error, false), "toast toast--error");
}

#[test]
fn toast_class_appends_leaving_modifier() {
    assert_eq!(
        toast_class(ToastKind::Error, true),
        "toast toast--error toast--leaving"
    );
}
