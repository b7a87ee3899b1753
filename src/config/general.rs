//! The general configuration settings for the globber.
//!
//! Defines the [General] struct deserialized from the `[general]` table of
//! `globber.toml`.

use crate::core::fm::FilenameFilter;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    confirm_quit: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            confirm_quit: true,
        }
    }
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn confirm_quit(&self) -> bool {
        self.confirm_quit
    }

    /// Inclusion rule handed to the entry lister.
    pub fn filename_filter(&self) -> FilenameFilter {
        FilenameFilter::from_show_hidden(self.show_hidden)
    }
}
