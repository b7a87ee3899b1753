//! Yes/No quit confirmation.

use crate::app::keymap::Input;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuitChoice {
    Yes,
    No,
}

impl QuitChoice {
    pub const ALL: [QuitChoice; 2] = [QuitChoice::Yes, QuitChoice::No];

    pub fn label(&self) -> &'static str {
        match self {
            QuitChoice::Yes => "Yes",
            QuitChoice::No => "No",
        }
    }

    fn toggled(self) -> Self {
        match self {
            QuitChoice::Yes => QuitChoice::No,
            QuitChoice::No => QuitChoice::Yes,
        }
    }
}

/// Result of feeding one key to the prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Quit,
    Cancel,
}

/// Modal state while the quit question is on screen. The cursor starts on `No`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuitPrompt {
    selected: QuitChoice,
}

impl QuitPrompt {
    pub fn new() -> Self {
        QuitPrompt {
            selected: QuitChoice::No,
        }
    }

    #[inline]
    pub fn selected(&self) -> QuitChoice {
        self.selected
    }

    pub fn handle(&mut self, input: Input) -> PromptOutcome {
        match input {
            // With two options, moving either way wraps onto the other one.
            Input::Up | Input::Down | Input::Left | Input::Right => {
                self.selected = self.selected.toggled();
                PromptOutcome::Pending
            }
            Input::Enter | Input::Tab => match self.selected {
                QuitChoice::Yes => PromptOutcome::Quit,
                QuitChoice::No => PromptOutcome::Cancel,
            },
            Input::Esc => PromptOutcome::Cancel,
            _ => PromptOutcome::Pending,
        }
    }
}

impl Default for QuitPrompt {
    fn default() -> Self {
        Self::new()
    }
}
