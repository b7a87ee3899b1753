//! Core runtime logic for the globber.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory listing, glob filtering and dotfile hiding (see [list_entries], [Listing]).
//! - [layout]: placement of entries into height-bounded column bands (see [layout_entries]).
//! - [proc]: opening files with the platform's default handler.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod fm;
pub mod layout;
pub mod proc;
pub mod terminal;

pub use fm::{Entry, EntryKind, FilenameFilter, Listing, list_entries};
pub use layout::{LayoutAccumulator, Placement, Viewport, layout_entries};
pub use proc::open_with_default_handler;
