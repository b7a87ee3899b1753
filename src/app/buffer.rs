//! Edit buffer parsing.
//!
//! The edit buffer holds the path the user is typing, optionally followed by a
//! glob pattern after a `:` delimiter, e.g. `/home/user:*.py`.
//!
//! On platforms whose paths carry a drive colon (`C:\Users`) the first colon
//! belongs to the path, so a pattern only exists once the buffer contains
//! more colons than that baseline. Paths containing extra colons for other
//! reasons are misread as carrying a pattern; that limitation is kept.

use std::path::Path;

/// Separates the directory part of the buffer from the glob pattern.
pub const PATTERN_DELIMITER: char = ':';

/// Colons a plain path may carry on this platform.
#[cfg(windows)]
pub const PATH_DELIMITER_BASELINE: usize = 1;
#[cfg(not(windows))]
pub const PATH_DELIMITER_BASELINE: usize = 0;

/// The directory and optional pattern an edit buffer points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferTarget<'a> {
    pub dir: &'a str,
    pub pattern: Option<&'a str>,
}

impl BufferTarget<'_> {
    #[inline]
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Whether the directory part names an existing directory.
    pub fn dir_exists(&self) -> bool {
        !self.dir.is_empty() && Path::new(self.dir).is_dir()
    }
}

/// Splits `buffer` using the current platform's delimiter baseline.
pub fn resolve_buffer(buffer: &str) -> BufferTarget<'_> {
    resolve_buffer_with(buffer, PATH_DELIMITER_BASELINE)
}

/// Splits `buffer` into directory and pattern given how many delimiters a
/// plain path may contain.
pub fn resolve_buffer_with(buffer: &str, baseline: usize) -> BufferTarget<'_> {
    let count = buffer.matches(PATTERN_DELIMITER).count();
    if count > baseline
        && let Some((dir, pattern)) = buffer.rsplit_once(PATTERN_DELIMITER)
    {
        return BufferTarget {
            dir,
            pattern: Some(pattern),
        };
    }
    BufferTarget {
        dir: buffer,
        pattern: None,
    }
}
