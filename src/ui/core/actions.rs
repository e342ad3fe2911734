use crate::todo::ItemId;

/// Interactive regions of the screen, in focus-ring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    AddButton,
    List,
    ClearButton,
}

impl Focus {
    /// Next region in the ring. The clear button is skipped while hidden.
    pub fn next(self, clear_visible: bool) -> Self {
        match self {
            Focus::Input => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List if clear_visible => Focus::ClearButton,
            Focus::List | Focus::ClearButton => Focus::Input,
        }
    }

    /// Previous region in the ring. The clear button is skipped while hidden.
    pub fn previous(self, clear_visible: bool) -> Self {
        match self {
            Focus::Input if clear_visible => Focus::ClearButton,
            Focus::Input => Focus::List,
            Focus::AddButton => Focus::Input,
            Focus::List => Focus::AddButton,
            Focus::ClearButton => Focus::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Draft and item operations
    SetDraft(String),
    AddFromDraft,
    ToggleItem(ItemId),
    RemoveItem(ItemId),
    ClearCompleted,

    // Navigation
    FocusNext,
    FocusPrevious,
    NextItem,
    PreviousItem,

    // UI operations
    CycleIconTheme,
    ToggleLogs,
    ClearLogs,

    // App control
    Quit,
    None,
}
