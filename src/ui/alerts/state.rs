use crate::modal::ModalState;
use crate::store::UiState;
use crate::ui::alerts::action::AlertsAction;

/// State of the alerts screen: a counter and two independent modal slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertsScreenState {
    pub count: i64,
    /// Confirmation dialog slot.
    pub alert: ModalState<AlertsAction>,
    /// Option-sheet slot.
    pub sheet: ModalState<AlertsAction>,
}

impl UiState for AlertsScreenState {}

impl AlertsScreenState {
    /// True while either modal surface is on screen.
    pub fn any_modal_shown(&self) -> bool {
        self.alert.is_shown() || self.sheet.is_shown()
    }
}
