use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "saved");
    let second = state.push(ToastKind::Error, "failed");
    assert!(second > first);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    let second = state.push(ToastKind::Error, "two");

    state.dismiss(first);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, second);

    // Dismissing an unknown id is a no-op.
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    state.dismiss(first);
    let second = state.push(ToastKind::Success, "two");
    assert!(second > first);
}

#[test]
fn kind_maps_to_css_class() {
    assert_eq!(ToastKind::Success.css_class(), "toast toast--success");
    assert_eq!(ToastKind::Error.css_class(), "toast toast--error");
}
