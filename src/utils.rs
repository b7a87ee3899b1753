//! Miscellaneous utility functions for the globber.
//!
//! - [cli]: command-line parsing and help text
//! - [helpers]: path normalization, home shortening, start directory resolution
//! - [logging]: opt-in file logging through `tracing`

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    default_start_dir, get_home, normalize_path, resolve_start_dir, shorten_home_path,
};
