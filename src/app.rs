//! Application state for the globber.
//!
//! [Session] wires the navigation state machine to the configuration and the
//! quit prompt. The terminal loop calls [Session::begin_frame] once per
//! frame and hands every key to [Session::handle_input].
//!
//! Submodules:
//! - [buffer]: splitting the edit buffer into directory and glob pattern
//! - [keymap]: crossterm key events to [Input]
//! - [prompt]: the Yes/No quit confirmation
//! - [state]: [NavigationState] and the pure [next_state] transition

pub mod buffer;
pub mod keymap;
pub mod prompt;
pub mod state;

pub use keymap::{Input, input_from_key};
pub use prompt::{PromptOutcome, QuitChoice, QuitPrompt};
pub use state::{Effect, NavigationState, Transition, next_state};

use crate::config::Config;
use crate::core::fm::Listing;
use crate::core::layout::Viewport;

use std::path::PathBuf;

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
    Open(PathBuf),
}

/// Whether keys go to navigation or to the quit prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    ConfirmQuit(QuitPrompt),
}

pub struct Session<'a> {
    config: &'a Config,
    nav: NavigationState,
    mode: Mode,
}

impl<'a> Session<'a> {
    /// Creates a session rooted at `start`. A `quit_key` given on the command
    /// line wins over the configured one.
    pub fn new(config: &'a Config, start: PathBuf, quit_key: Option<char>) -> Self {
        let quit_key = quit_key.unwrap_or_else(|| config.keys().quit());
        Self {
            config,
            nav: NavigationState::new(start, quit_key),
            mode: Mode::Browsing,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Lists what the current path and edit buffer point at.
    pub fn listing(&self) -> Listing {
        self.nav.listing(
            self.config.general().filename_filter(),
            self.config.display().parent_entry(),
        )
    }

    /// Records the terminal size, re-lists and clamps the selection to the fresh listing.
    pub fn begin_frame(&mut self, viewport: Viewport) -> Listing {
        self.nav.set_viewport(viewport);
        let listing = self.listing();
        self.nav.clamp_selection(listing.len());
        listing
    }

    /// Feeds one key to the active mode.
    pub fn handle_input(&mut self, input: Input, listing: &Listing) -> KeypressResult {
        if let Mode::ConfirmQuit(mut prompt) = self.mode {
            return match prompt.handle(input) {
                PromptOutcome::Quit => KeypressResult::Quit,
                PromptOutcome::Cancel => {
                    self.mode = Mode::Browsing;
                    KeypressResult::Continue
                }
                PromptOutcome::Pending => {
                    self.mode = Mode::ConfirmQuit(prompt);
                    KeypressResult::Continue
                }
            };
        }

        let Transition { state, effect } = next_state(self.nav.clone(), input, listing);
        self.nav = state;

        match effect {
            Effect::None => KeypressResult::Continue,
            Effect::Open(path) => KeypressResult::Open(path),
            Effect::ConfirmQuit if self.config.general().confirm_quit() => {
                self.mode = Mode::ConfirmQuit(QuitPrompt::new());
                KeypressResult::Continue
            }
            Effect::ConfirmQuit => KeypressResult::Quit,
        }
    }
}
