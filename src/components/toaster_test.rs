use super::*;
use leptos::reactive::owner::Owner;

fn handle_with_owner(duration_ms: u32) -> (Owner, RwSignal<ToastState>, ToastHandle) {
    let owner = Owner::new();
    owner.set();
    let toasts = RwSignal::new(ToastState::default());
    (owner, toasts, ToastHandle::new(toasts, duration_ms))
}

#[test]
fn success_queues_exactly_one_toast_with_message_and_duration() {
    let (_owner, toasts, handle) = handle_with_owner(2_000);
    handle.success("Thank you for your submission!");

    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "Thank you for your submission!");
    assert_eq!(state.toasts[0].duration_ms, 2_000);
}

#[test]
fn each_success_call_queues_its_own_toast() {
    let (_owner, toasts, handle) = handle_with_owner(0);
    handle.success("one");
    handle.success("two");

    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 2);
    assert_ne!(state.toasts[0].id, state.toasts[1].id);
}

#[test]
fn handle_exposes_its_queue() {
    let (_owner, toasts, handle) = handle_with_owner(2_000);
    handle.success("x");
    assert_eq!(handle.toasts().get_untracked().toasts, toasts.get_untracked().toasts);
}

#[test]
fn success_on_disposed_queue_is_noop() {
    let (_owner, toasts, handle) = handle_with_owner(2_000);
    toasts.dispose();
    handle.success("late");
    assert!(toasts.try_get_untracked().is_none());
}
