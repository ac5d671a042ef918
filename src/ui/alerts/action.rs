use crate::store::Action;

/// Everything a user can do on the alerts screen.
///
/// `Increment`/`Decrement` are also bound to modal buttons, so activating
/// one of those buttons from an open alert adjusts the count without
/// dismissing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertsAction {
    ShowAlert,
    CancelAlert,
    ShowSheet,
    CancelSheet,
    Increment,
    Decrement,
}

impl Action for AlertsAction {}
