use crate::config::Config;
use crate::modal::{ModalPayload, ModalState};
use crate::store::Store;
use crate::ui::alerts::{AlertsAction, AlertsReducer, AlertsScreenState};

/// Which modal surface currently receives input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalSlot {
    Alert,
    Sheet,
}

pub struct App {
    store: Store<AlertsReducer>,
    should_quit: bool,
    /// View-local focus index into the active modal's buttons.
    /// Deliberately not part of [`AlertsScreenState`]: which button the
    /// cursor rests on is presentation, not screen state.
    button_selection: usize,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            store: Store::new(AlertsScreenState::default()),
            should_quit: false,
            button_selection: 0,
            config,
        }
    }

    pub fn state(&self) -> &AlertsScreenState {
        self.store.state()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Topmost shown modal; the alert renders above the sheet when both
    /// slots are shown, so it also receives input first.
    pub fn active_modal(&self) -> Option<(ModalSlot, &ModalPayload<AlertsAction>)> {
        let state = self.store.state();
        if let ModalState::Shown(payload) = &state.alert {
            return Some((ModalSlot::Alert, payload));
        }
        if let ModalState::Shown(payload) = &state.sheet {
            return Some((ModalSlot::Sheet, payload));
        }
        None
    }

    pub fn button_selection(&self) -> usize {
        self.button_selection
    }

    pub fn move_button_selection(&mut self, delta: isize) {
        let Some((_, payload)) = self.active_modal() else {
            return;
        };
        let len = payload.buttons.len();
        if len == 0 {
            return;
        }
        self.button_selection = if delta < 0 {
            if self.button_selection == 0 {
                len - 1
            } else {
                self.button_selection - 1
            }
        } else if self.button_selection + 1 >= len {
            0
        } else {
            self.button_selection + 1
        };
    }

    /// Dispatch the action bound to the currently selected button.
    pub fn activate_selected(&mut self) {
        self.activate_button(self.button_selection);
    }

    /// Dispatch the action bound to the button at `index`.
    ///
    /// Returns false when no modal is active or the index is out of range.
    pub fn activate_button(&mut self, index: usize) -> bool {
        let Some((_, payload)) = self.active_modal() else {
            return false;
        };
        let Some(button) = payload.buttons.get(index) else {
            return false;
        };
        let action = button.action;
        self.dispatch(action);
        true
    }

    /// Dismiss the active modal through its explicit cancel action.
    pub fn dismiss_active(&mut self) {
        let Some((slot, _)) = self.active_modal() else {
            return;
        };
        let action = match slot {
            ModalSlot::Alert => AlertsAction::CancelAlert,
            ModalSlot::Sheet => AlertsAction::CancelSheet,
        };
        self.dispatch(action);
    }

    /// Route an action through the store, resetting button focus when the
    /// active modal surface changes.
    pub fn dispatch(&mut self, action: AlertsAction) {
        let before = self.active_modal().map(|(slot, _)| slot);
        self.store.dispatch(action);
        let after = self.active_modal().map(|(slot, _)| slot);
        if before != after {
            self.button_selection = 0;
        }
    }
}
