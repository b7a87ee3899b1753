//! Display configuration options for the globber
//!
//! This module defines the `[display]` table of `globber.toml`.

use crate::core::fm::EntryKind;

use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

const FOLDER_PREFIX: &str = "📁 ";
const FILE_PREFIX: &str = "📄 ";

/// Display configuration options
///
/// `emojis` only changes the glyph in front of each name (and with it the
/// width the layout reserves). `parent_entry` adds the `..` folder to every
/// listing without a pattern.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    emojis: bool,
    parent_entry: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            emojis: true,
            parent_entry: true,
        }
    }
}

impl Display {
    #[inline]
    pub fn emojis(&self) -> bool {
        self.emojis
    }

    #[inline]
    pub fn parent_entry(&self) -> bool {
        self.parent_entry
    }

    /// Glyph painted in front of an entry name.
    pub fn prefix(&self, kind: EntryKind) -> &'static str {
        if !self.emojis {
            return "";
        }
        match kind {
            EntryKind::Directory => FOLDER_PREFIX,
            EntryKind::File => FILE_PREFIX,
        }
    }

    /// Widest prefix in terminal cells.
    pub fn prefix_width(&self) -> usize {
        self.prefix(EntryKind::Directory)
            .width()
            .max(self.prefix(EntryKind::File).width())
    }
}
