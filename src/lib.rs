//! Internal library crate for the globber.
//!
//! The shipped application is the `globber` binary (`src/main.rs`).
//!
//! The library exists to share code between targets (binary, tests) and to keep modules organized.
//! It is not considered a library for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
