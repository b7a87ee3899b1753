//! Input configuration options for the globber
//!
//! Only the quit key is configurable: every other printable key types into
//! the edit buffer.

use crate::app::state::DEFAULT_QUIT_KEY;

use serde::Deserialize;

/// Input configuration options from the `[keys]` table
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Keys {
    quit: String,
}

impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: DEFAULT_QUIT_KEY.to_string(),
        }
    }
}

impl Keys {
    /// First character of the configured quit key, or the default when empty.
    pub fn quit(&self) -> char {
        self.quit
            .trim()
            .chars()
            .next()
            .unwrap_or(DEFAULT_QUIT_KEY)
    }
}
