//! Opt-in file logging.
//!
//! The terminal is owned by the TUI, so records never go to stderr. Setting
//! `GLOBBER_LOG` to a filter directive (`debug`, `file_globber=trace`, ...)
//! appends records to `GLOBBER_LOG_FILE`, or `globber.log` in the temp dir.

use tracing_subscriber::EnvFilter;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

pub const LOG_FILTER_ENV: &str = "GLOBBER_LOG";
pub const LOG_FILE_ENV: &str = "GLOBBER_LOG_FILE";

/// File the log records go to.
pub fn log_file_path() -> PathBuf {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join("globber.log"),
    }
}

/// Installs the global subscriber when `GLOBBER_LOG` is set.
///
/// Returns the log file path in use, or `None` when logging stays off.
pub fn init_logging() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).ok()?;
    let path = log_file_path();

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[globber] Cannot open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init();

    match installed {
        Ok(()) => Some(path),
        Err(_) => None,
    }
}
