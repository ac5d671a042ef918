use uniflow::modal::{ButtonRole, ModalButton, ModalPayload, ModalState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Confirm,
    Dismiss,
}

fn payload() -> ModalPayload<Pick> {
    ModalPayload::new(
        "Title",
        vec![
            ModalButton::cancel("Cancel", Pick::Dismiss),
            ModalButton::plain("OK", Pick::Confirm),
        ],
    )
    .with_message("message")
}

#[test]
fn default_is_dismissed() {
    let state: ModalState<Pick> = ModalState::default();
    assert_eq!(state, ModalState::Dismissed);
    assert!(!state.is_shown());
}

#[test]
fn show_carries_payload() {
    let state = ModalState::show(payload());
    assert!(state.is_shown());
    let shown = state.payload().expect("shown modal has a payload");
    assert_eq!(shown.title, "Title");
    assert_eq!(shown.message.as_deref(), Some("message"));
}

#[test]
fn dismissed_has_no_payload() {
    let state: ModalState<Pick> = ModalState::Dismissed;
    assert!(state.payload().is_none());
}

#[test]
fn buttons_preserve_order() {
    let state = ModalState::show(payload());
    let buttons = &state.payload().expect("shown").buttons;
    assert_eq!(buttons[0].label, "Cancel");
    assert_eq!(buttons[1].label, "OK");
}

#[test]
fn button_constructors_assign_roles() {
    assert_eq!(ModalButton::plain("a", Pick::Confirm).role, ButtonRole::Default);
    assert_eq!(ModalButton::cancel("b", Pick::Dismiss).role, ButtonRole::Cancel);
    assert_eq!(
        ModalButton::destructive("c", Pick::Confirm).role,
        ButtonRole::Destructive
    );
}

#[test]
fn payload_without_message() {
    let payload: ModalPayload<Pick> = ModalPayload::new("Bare", vec![]);
    assert!(payload.message.is_none());
}
