mod action;
mod reducer;
mod state;

pub use action::AlertsAction;
pub use reducer::AlertsReducer;
pub use state::AlertsScreenState;
