use crate::modal::{ModalButton, ModalPayload, ModalState};
use crate::store::Reducer;
use crate::ui::alerts::action::AlertsAction;
use crate::ui::alerts::state::AlertsScreenState;

pub struct AlertsReducer;

impl Reducer for AlertsReducer {
    type State = AlertsScreenState;
    type Action = AlertsAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AlertsAction::ShowAlert => {
                state.alert = ModalState::show(
                    ModalPayload::new(
                        "Alert!",
                        vec![
                            ModalButton::cancel("Cancel", AlertsAction::CancelAlert),
                            ModalButton::plain("Increment", AlertsAction::Increment),
                            ModalButton::plain("Decrement", AlertsAction::Decrement),
                        ],
                    )
                    .with_message("This is an alert."),
                );
                state
            }
            AlertsAction::CancelAlert => {
                state.alert = ModalState::Dismissed;
                state
            }
            AlertsAction::ShowSheet => {
                state.sheet = ModalState::show(
                    ModalPayload::new(
                        "Action sheet",
                        vec![
                            ModalButton::cancel("Cancel", AlertsAction::CancelSheet),
                            ModalButton::plain("Increment", AlertsAction::Increment),
                            ModalButton::plain("Decrement", AlertsAction::Decrement),
                        ],
                    )
                    .with_message("This is an action sheet."),
                );
                state
            }
            AlertsAction::CancelSheet => {
                state.sheet = ModalState::Dismissed;
                state
            }
            AlertsAction::Increment => {
                state.count += 1;
                state
            }
            AlertsAction::Decrement => {
                state.count -= 1;
                state
            }
        }
    }
}
