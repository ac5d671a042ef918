//! Declarative modal presentation.
//!
//! Whether a dialog or sheet is on screen is plain state: a modal slot is
//! either [`ModalState::Dismissed`] or [`ModalState::Shown`] with a payload
//! describing the title, message, and buttons. Reducers construct payloads;
//! the rendering layer draws whatever the slot holds and dispatches the
//! action bound to a button when it is activated. There is no other way to
//! open or close a modal.

mod button;
mod state;

pub use button::{ButtonRole, ModalButton};
pub use state::{ModalPayload, ModalState};
