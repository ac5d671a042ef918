use crate::modal::button::ModalButton;

/// Content of a shown modal: title, optional message, ordered buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalPayload<A> {
    pub title: String,
    pub message: Option<String>,
    pub buttons: Vec<ModalButton<A>>,
}

impl<A> ModalPayload<A> {
    pub fn new(title: impl Into<String>, buttons: Vec<ModalButton<A>>) -> Self {
        Self {
            title: title.into(),
            message: None,
            buttons,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Presentation state of one modal slot.
///
/// A sum type rather than an optional payload: `Shown` carries exactly one
/// payload snapshot, valid until the transition back to `Dismissed`, so a
/// stale payload cannot outlive its presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<A> {
    #[default]
    Dismissed,
    Shown(ModalPayload<A>),
}

impl<A> ModalState<A> {
    /// Transition to `Shown` with the given payload.
    pub fn show(payload: ModalPayload<A>) -> Self {
        Self::Shown(payload)
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    /// Payload of a shown modal, `None` when dismissed.
    pub fn payload(&self) -> Option<&ModalPayload<A>> {
        match self {
            Self::Shown(payload) => Some(payload),
            Self::Dismissed => None,
        }
    }
}
