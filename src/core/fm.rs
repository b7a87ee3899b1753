//! Directory listing logic for the globber.
//!
//! Provides the [Entry] and [Listing] types used throughout the app, the
//! [FilenameFilter] used to hide dotfiles, and [list_entries] which resolves a
//! directory (optionally narrowed by a glob pattern) into folders and files.

use globset::{GlobBuilder, GlobMatcher};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

/// Name of the synthetic entry pointing at the parent directory.
pub const PARENT_ENTRY: &str = "..";

/// Kind of a listed entry. Symlinks are classified by their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child of a directory, by name only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: OsString,
    kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Entry {
            name: name.into(),
            kind,
        }
    }

    pub fn parent() -> Self {
        Entry::new(PARENT_ENTRY, EntryKind::Directory)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Directory contents split into folders and files.
///
/// Folders always come first in any combined index: `0..folders.len()` are
/// folders, the remainder are files. Within each group the OS order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    folders: Vec<Entry>,
    files: Vec<Entry>,
}

impl Listing {
    pub fn new(folders: Vec<Entry>, files: Vec<Entry>) -> Self {
        Listing { folders, files }
    }

    #[inline]
    pub fn folders(&self) -> &[Entry] {
        &self.folders
    }

    #[inline]
    pub fn files(&self) -> &[Entry] {
        &self.files
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up an entry by its combined index.
    pub fn get(&self, idx: usize) -> Option<&Entry> {
        if idx < self.folders.len() {
            self.folders.get(idx)
        } else {
            self.files.get(idx - self.folders.len())
        }
    }

    /// Iterates folders then files, the order used for selection.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.folders.iter().chain(self.files.iter())
    }
}

/// Inclusion rule applied to every candidate name before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilenameFilter {
    ShowAll,
    #[default]
    HideDotfiles,
}

impl FilenameFilter {
    pub fn from_show_hidden(show_hidden: bool) -> Self {
        if show_hidden {
            FilenameFilter::ShowAll
        } else {
            FilenameFilter::HideDotfiles
        }
    }

    pub fn includes(&self, name: &OsStr) -> bool {
        match self {
            FilenameFilter::ShowAll => true,
            FilenameFilter::HideDotfiles => !name.to_string_lossy().starts_with('.'),
        }
    }
}

/// Lists the direct children of `path`.
///
/// With a `pattern`, only names matching the glob are kept and the parent
/// entry is never added. Unreadable directories and broken entries never
/// produce an error: whatever was collected so far is returned.
pub fn list_entries(
    path: &Path,
    filter: FilenameFilter,
    pattern: Option<&str>,
    show_parent: bool,
) -> Listing {
    let mut folders = Vec::new();
    let mut files = Vec::new();

    let matcher = match pattern.map(compile_pattern) {
        Some(Some(m)) => Some(m),
        Some(None) => return Listing::default(),
        None => None,
    };
    let show_parent = show_parent && matcher.is_none();

    if show_parent {
        folders.push(Entry::parent());
    }

    let read = match fs::read_dir(path) {
        Ok(read) => read,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot read directory");
            return Listing::new(folders, files);
        }
    };

    for entry in read {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name();
        if !filter.includes(&name) {
            continue;
        }
        if let Some(m) = &matcher
            && !m.matches(&name)
        {
            continue;
        }

        if path.join(&name).is_dir() {
            folders.push(Entry::new(name, EntryKind::Directory));
        } else {
            files.push(Entry::new(name, EntryKind::File));
        }
    }

    Listing::new(folders, files)
}

/// Glob matcher with shell dotfile rules: wildcards and classes never match
/// a leading `.`, only a pattern that itself starts with `.` does.
struct PatternMatcher {
    glob: GlobMatcher,
    leading_dot: bool,
}

impl PatternMatcher {
    fn matches(&self, name: &OsStr) -> bool {
        if !self.leading_dot && name.to_string_lossy().starts_with('.') {
            return false;
        }
        self.glob.is_match(name)
    }
}

fn compile_pattern(pattern: &str) -> Option<PatternMatcher> {
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => Some(PatternMatcher {
            glob: glob.compile_matcher(),
            leading_dot: pattern.starts_with('.'),
        }),
        Err(e) => {
            tracing::debug!(pattern, error = %e, "invalid glob pattern");
            None
        }
    }
}
