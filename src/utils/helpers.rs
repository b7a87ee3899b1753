//! Helpers for the globber.
//!
//! - Lexical path normalization used when entering folders
//! - Displaying home directories as "~" in the header
//! - Resolving the start directory given on the command line

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Home directory of the current user, if known.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Removes `.` components and folds `..` into the preceding component
/// without touching the filesystem.
///
/// `..` above the root stays at the root, `..` at the start of a relative
/// path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Util function to shorten home directory to ~.
/// Is used by the header line of the renderer.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

/// Turns a start path argument into an absolute directory path.
///
/// A leading `~` is expanded to the home directory, relative paths are
/// resolved against the working directory.
pub fn resolve_start_dir(arg: &str) -> PathBuf {
    let expanded = match arg.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => match get_home() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(arg),
        },
        _ => PathBuf::from(arg),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };
    normalize_path(&absolute)
}

/// Directory the session starts in when none is given: home, else the working directory.
pub fn default_start_dir() -> PathBuf {
    get_home()
        .filter(|home| home.is_dir())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_folds_parent() {
        assert_eq!(normalize_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_path(Path::new("/a/./b/..")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_stops_at_root() {
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize_path(Path::new("/../../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_path(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_shorten_home_path() {
        if let Some(home) = get_home() {
            assert_eq!(shorten_home_path(&home), "~");
            let nested = home.join("projects");
            assert_eq!(
                shorten_home_path(&nested),
                format!("~{}projects", MAIN_SEPARATOR)
            );
        }
    }

    #[test]
    fn test_resolve_start_dir_absolute() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let child = dir.path().join("x");
        let arg = format!("{}/x/..", dir.path().display());
        assert_eq!(resolve_start_dir(&arg), normalize_path(&child.join("..")));
        assert!(resolve_start_dir(&arg).is_dir());
        Ok(())
    }

    #[test]
    fn test_resolve_start_dir_home() {
        if let Some(home) = get_home() {
            assert_eq!(resolve_start_dir("~"), normalize_path(&home));
        }
    }
}
