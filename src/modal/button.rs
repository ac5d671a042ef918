/// Visual and semantic role of a modal button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Ordinary choice.
    Default,
    /// Dismisses the modal without applying anything.
    Cancel,
    /// Irreversible choice, rendered prominently.
    Destructive,
}

/// One button in a modal payload, bound to the action it dispatches.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalButton<A> {
    pub label: String,
    pub role: ButtonRole,
    pub action: A,
}

impl<A> ModalButton<A> {
    pub fn new(label: impl Into<String>, role: ButtonRole, action: A) -> Self {
        Self {
            label: label.into(),
            role,
            action,
        }
    }

    /// Default-role button.
    pub fn plain(label: impl Into<String>, action: A) -> Self {
        Self::new(label, ButtonRole::Default, action)
    }

    /// Cancel-role button.
    pub fn cancel(label: impl Into<String>, action: A) -> Self {
        Self::new(label, ButtonRole::Cancel, action)
    }

    /// Destructive-role button.
    pub fn destructive(label: impl Into<String>, action: A) -> Self {
        Self::new(label, ButtonRole::Destructive, action)
    }
}
