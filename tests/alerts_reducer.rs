use uniflow::modal::{ButtonRole, ModalState};
use uniflow::store::Reducer;
use uniflow::ui::alerts::{AlertsAction, AlertsReducer, AlertsScreenState};

fn reduce(state: AlertsScreenState, action: AlertsAction) -> AlertsScreenState {
    AlertsReducer::reduce(state, action)
}

fn shown_alert() -> AlertsScreenState {
    reduce(AlertsScreenState::default(), AlertsAction::ShowAlert)
}

fn shown_sheet() -> AlertsScreenState {
    reduce(AlertsScreenState::default(), AlertsAction::ShowSheet)
}

#[test]
fn show_alert_shows_dialog() {
    let state = shown_alert();
    assert!(state.alert.is_shown());
    assert!(!state.sheet.is_shown());
}

#[test]
fn alert_has_exactly_three_buttons() {
    let state = shown_alert();
    let payload = state.alert.payload().expect("alert should be shown");
    assert_eq!(payload.buttons.len(), 3);
    assert_eq!(payload.buttons[0].role, ButtonRole::Cancel);
    assert_eq!(payload.buttons[0].action, AlertsAction::CancelAlert);
    assert_eq!(payload.buttons[1].role, ButtonRole::Default);
    assert_eq!(payload.buttons[1].action, AlertsAction::Increment);
    assert_eq!(payload.buttons[2].role, ButtonRole::Default);
    assert_eq!(payload.buttons[2].action, AlertsAction::Decrement);
}

#[test]
fn alert_title_and_message() {
    let state = shown_alert();
    let payload = state.alert.payload().expect("alert should be shown");
    assert_eq!(payload.title, "Alert!");
    assert_eq!(payload.message.as_deref(), Some("This is an alert."));
}

#[test]
fn sheet_buttons_bind_sheet_cancel() {
    let state = shown_sheet();
    let payload = state.sheet.payload().expect("sheet should be shown");
    assert_eq!(payload.title, "Action sheet");
    assert_eq!(payload.buttons.len(), 3);
    assert_eq!(payload.buttons[0].action, AlertsAction::CancelSheet);
}

#[test]
fn cancel_alert_dismisses() {
    let state = reduce(shown_alert(), AlertsAction::CancelAlert);
    assert_eq!(state.alert, ModalState::Dismissed);
}

#[test]
fn cancel_sheet_dismisses() {
    let state = reduce(shown_sheet(), AlertsAction::CancelSheet);
    assert_eq!(state.sheet, ModalState::Dismissed);
}

#[test]
fn cancel_alert_is_idempotent() {
    let once = reduce(shown_alert(), AlertsAction::CancelAlert);
    let twice = reduce(once.clone(), AlertsAction::CancelAlert);
    assert_eq!(once, twice);
    assert_eq!(twice.alert, ModalState::Dismissed);
}

#[test]
fn increment_increases_count() {
    let state = reduce(AlertsScreenState::default(), AlertsAction::Increment);
    assert_eq!(state.count, 1);
}

#[test]
fn decrement_decreases_count() {
    let state = reduce(AlertsScreenState::default(), AlertsAction::Decrement);
    assert_eq!(state.count, -1);
}

#[test]
fn count_changes_leave_modals_untouched() {
    let before = shown_alert();
    let after = reduce(before.clone(), AlertsAction::Increment);
    assert_eq!(after.alert, before.alert);
    assert_eq!(after.sheet, before.sheet);
    assert_eq!(after.count, before.count + 1);
}

#[test]
fn modal_slots_are_independent() {
    let state = reduce(shown_alert(), AlertsAction::ShowSheet);
    assert!(state.alert.is_shown());
    assert!(state.sheet.is_shown());

    let state = reduce(state, AlertsAction::CancelAlert);
    assert_eq!(state.alert, ModalState::Dismissed);
    assert!(state.sheet.is_shown());
}

// -- End-to-end scenario ------------------------------------------------------

#[test]
fn alert_flow_scenario() {
    let state = AlertsScreenState::default();
    assert_eq!(state.count, 0);
    assert!(!state.any_modal_shown());

    let state = reduce(state, AlertsAction::ShowAlert);
    assert!(state.alert.is_shown());

    // Increment is bound to one of the alert's buttons
    let state = reduce(state, AlertsAction::Increment);
    assert_eq!(state.count, 1);
    assert!(state.alert.is_shown(), "alert stays up across count changes");

    let state = reduce(state, AlertsAction::CancelAlert);
    assert_eq!(state.alert, ModalState::Dismissed);
    assert_eq!(state.count, 1);
}
