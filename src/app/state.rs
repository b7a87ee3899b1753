//! Navigation state machine for the globber.
//!
//! [NavigationState] holds everything a keystroke can change. [next_state]
//! consumes one [Input] against the listing shown on screen and returns the
//! new state together with the side effect the session has to carry out.
//! It never touches the terminal, so every transition can be tested directly.

use crate::app::buffer::resolve_buffer;
use crate::app::keymap::Input;
use crate::core::fm::{FilenameFilter, Listing, list_entries};
use crate::core::layout::Viewport;
use crate::utils::normalize_path;

use std::path::{Path, PathBuf};

/// Quit key used when neither the config nor the command line sets one.
pub const DEFAULT_QUIT_KEY: char = '$';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_path: PathBuf,
    edit_buffer: String,
    selected: usize,
    viewport: Viewport,
    quit_key: char,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Open(PathBuf),
    ConfirmQuit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    pub effect: Effect,
}

impl NavigationState {
    pub fn new(path: PathBuf, quit_key: char) -> Self {
        let edit_buffer = path.to_string_lossy().into_owned();
        Self {
            current_path: path,
            edit_buffer,
            selected: 0,
            viewport: Viewport::new(0, 0),
            quit_key,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    #[inline]
    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn quit_key(&self) -> char {
        self.quit_key
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_selected(&mut self, selected: usize) {
        self.selected = selected;
    }

    /// Keeps the selection inside `0..total`, or at 0 for an empty listing.
    pub fn clamp_selection(&mut self, total: usize) {
        self.selected = self.selected.min(total.saturating_sub(1));
    }

    /// Resolves the directory and pattern currently shown into a [Listing].
    ///
    /// A pattern in the edit buffer lists the buffer's directory part,
    /// otherwise the current path is listed.
    pub fn listing(&self, filter: FilenameFilter, show_parent: bool) -> Listing {
        let target = resolve_buffer(&self.edit_buffer);
        match target.pattern {
            Some(pattern) => list_entries(Path::new(target.dir), filter, Some(pattern), false),
            None => list_entries(&self.current_path, filter, None, show_parent),
        }
    }

    fn enter(&mut self, listing: &Listing) -> Effect {
        let folders = listing.folders().len();
        let Some(entry) = listing.get(self.selected) else {
            return Effect::None;
        };
        let target = self.current_path.join(entry.name());

        if self.selected < folders {
            if !target.is_dir() {
                tracing::debug!(path = %target.display(), "folder vanished before entering");
                return Effect::None;
            }
            let normalized = normalize_path(&target);
            self.edit_buffer = normalized.to_string_lossy().into_owned();
            self.current_path = normalized;
            self.selected = 0;
            Effect::None
        } else {
            Effect::Open(target)
        }
    }

    /// Commits the buffer's directory part as the current path once it exists.
    fn sync_current_path(&mut self) {
        let target = resolve_buffer(&self.edit_buffer);
        if target.dir_exists() {
            self.current_path = PathBuf::from(target.dir);
        }
    }
}

/// Applies one keystroke to `state`.
pub fn next_state(mut state: NavigationState, input: Input, listing: &Listing) -> Transition {
    let total = listing.len();
    let page = state.viewport.band_height();

    let effect = match input {
        Input::Up => {
            state.selected = state.selected.saturating_sub(1);
            state.clamp_selection(total);
            Effect::None
        }
        Input::Down => {
            state.selected = state.selected.saturating_add(1);
            state.clamp_selection(total);
            Effect::None
        }
        Input::Left => {
            state.selected = state.selected.saturating_sub(page);
            state.clamp_selection(total);
            Effect::None
        }
        Input::Right => {
            state.selected = state.selected.saturating_add(page);
            state.clamp_selection(total);
            Effect::None
        }
        Input::Backspace => {
            state.edit_buffer.pop();
            Effect::None
        }
        Input::Enter => state.enter(listing),
        Input::Interrupt => return Transition::new(state, Effect::ConfirmQuit),
        Input::Char(c) if c == state.quit_key => {
            return Transition::new(state, Effect::ConfirmQuit);
        }
        Input::Char(c) => {
            state.edit_buffer.push(c);
            Effect::None
        }
        Input::Tab | Input::Esc | Input::Other => Effect::None,
    };

    state.sync_current_path();
    Transition::new(state, effect)
}

impl Transition {
    fn new(state: NavigationState, effect: Effect) -> Self {
        Transition { state, effect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fm::{Entry, EntryKind};
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn listing(folders: usize, files: usize) -> Listing {
        Listing::new(
            (0..folders)
                .map(|i| Entry::new(format!("d{i}"), EntryKind::Directory))
                .collect(),
            (0..files)
                .map(|i| Entry::new(format!("f{i}"), EntryKind::File))
                .collect(),
        )
    }

    fn state_at(path: &Path) -> NavigationState {
        let mut state = NavigationState::new(path.to_path_buf(), DEFAULT_QUIT_KEY);
        state.set_viewport(Viewport::new(10, 80));
        state
    }

    #[test]
    fn arrows_clamp_to_listing() {
        let list = listing(2, 3);
        let mut state = state_at(Path::new("/"));

        state = next_state(state, Input::Up, &list).state;
        assert_eq!(state.selected(), 0);

        for _ in 0..10 {
            state = next_state(state, Input::Down, &list).state;
        }
        assert_eq!(state.selected(), 4);
    }

    #[test]
    fn left_right_page_by_band() {
        let list = listing(0, 40);
        let mut state = state_at(Path::new("/"));

        state = next_state(state, Input::Right, &list).state;
        assert_eq!(state.selected(), 5);
        state = next_state(state, Input::Right, &list).state;
        assert_eq!(state.selected(), 10);
        state = next_state(state, Input::Left, &list).state;
        assert_eq!(state.selected(), 5);
        state = next_state(state, Input::Left, &list).state;
        state = next_state(state, Input::Left, &list).state;
        assert_eq!(state.selected(), 0);

        for _ in 0..20 {
            state = next_state(state, Input::Right, &list).state;
        }
        assert_eq!(state.selected(), 39);
    }

    #[test]
    fn empty_listing_keeps_selection_at_zero() {
        let list = Listing::default();
        let mut state = state_at(Path::new("/"));
        for input in [Input::Down, Input::Right, Input::Up, Input::Left, Input::Enter] {
            let t = next_state(state, input, &list);
            assert_eq!(t.effect, Effect::None);
            state = t.state;
            assert_eq!(state.selected(), 0);
        }
    }

    #[test]
    fn typing_commits_existing_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("ab"))?;
        let mut state = state_at(tmp.path());
        let list = Listing::default();

        state = next_state(state, Input::Char('/'), &list).state;
        state = next_state(state, Input::Char('a'), &list).state;
        // "<tmp>/a" does not exist yet
        assert_eq!(state.current_path(), tmp.path());

        state = next_state(state, Input::Char('b'), &list).state;
        assert_eq!(state.current_path(), tmp.path().join("ab"));
        assert!(state.edit_buffer().ends_with("/ab"));

        state = next_state(state, Input::Backspace, &list).state;
        assert_eq!(state.current_path(), tmp.path().join("ab"));
        assert!(state.edit_buffer().ends_with("/a"));
        Ok(())
    }

    #[test]
    fn pattern_suffix_commits_its_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let sub = tmp.path().join("src");
        fs::create_dir(&sub)?;
        File::create(sub.join("lib.rs"))?;
        File::create(sub.join("notes.md"))?;

        let mut state = state_at(tmp.path());
        for c in "/src:*.rs".chars() {
            state = next_state(state, Input::Char(c), &Listing::default()).state;
        }
        assert_eq!(state.current_path(), sub.as_path());

        let list = state.listing(FilenameFilter::ShowAll, true);
        assert!(list.folders().is_empty());
        let names: Vec<_> = list.files().iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, vec!["lib.rs"]);
        Ok(())
    }

    #[test]
    fn quit_key_leaves_state_untouched() {
        let list = listing(1, 1);
        let state = state_at(Path::new("/"));
        let t = next_state(state.clone(), Input::Char(DEFAULT_QUIT_KEY), &list);
        assert_eq!(t.effect, Effect::ConfirmQuit);
        assert_eq!(t.state, state);

        let t = next_state(state.clone(), Input::Interrupt, &list);
        assert_eq!(t.effect, Effect::ConfirmQuit);
    }

    #[test]
    fn custom_quit_key_is_typed_otherwise() {
        let list = Listing::default();
        let state = NavigationState::new(PathBuf::from("/nonexistent-root"), 'q');
        let t = next_state(state, Input::Char('$'), &list);
        assert_eq!(t.effect, Effect::None);
        assert!(t.state.edit_buffer().ends_with('$'));
    }

    #[test]
    fn enter_on_vanished_folder_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let list = Listing::new(vec![Entry::new("gone", EntryKind::Directory)], vec![]);
        let state = state_at(tmp.path());
        let t = next_state(state.clone(), Input::Enter, &list);
        assert_eq!(t.effect, Effect::None);
        assert_eq!(t.state, state);
        Ok(())
    }

    #[test]
    fn enter_on_parent_entry_normalizes() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let sub = tmp.path().join("child");
        fs::create_dir(&sub)?;

        let mut state = state_at(&sub);
        let list = state.listing(FilenameFilter::ShowAll, true);
        state.set_selected(0);
        let t = next_state(state, Input::Enter, &list);
        assert_eq!(t.state.current_path(), tmp.path());
        assert_eq!(t.state.edit_buffer(), tmp.path().to_string_lossy());
        Ok(())
    }
}
