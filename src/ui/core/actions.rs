/// Widget that currently receives keyboard input.
///
/// Tab walks the ring in declaration order and wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    AddButton,
    SelectButton,
    RemoveButton,
    Watching,
}

impl Focus {
    const RING: [Focus; 5] = [
        Focus::Input,
        Focus::AddButton,
        Focus::SelectButton,
        Focus::RemoveButton,
        Focus::Watching,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn previous(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// The action a button triggers, if this focus is a button
    pub fn button_action(self) -> Option<Action> {
        match self {
            Focus::AddButton => Some(Action::AddItem),
            Focus::SelectButton => Some(Action::SelectRandom),
            Focus::RemoveButton => Some(Action::RemoveItem),
            Focus::Input | Focus::Watching => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Watch list commands
    AddItem,
    SelectRandom,
    RemoveItem,

    // Focus
    FocusNext,
    FocusPrevious,
    SetFocus(Focus),

    // Item view scrolling
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // Dialogs
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    /// Confirmation after a successful command
    Info(String),
    /// Validation failure, nothing was changed
    Rejected(String),
    Help,
    Logs,
}
