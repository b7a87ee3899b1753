//! Configuration for the globber.
//!
//! - [load]: locating, reading and generating `globber.toml`
//! - [general]: hidden entries and quit confirmation
//! - [display]: glyph prefixes and the `..` entry
//! - [input]: the quit key

pub mod display;
pub mod general;
pub mod input;
pub mod load;

pub use display::Display;
pub use general::General;
pub use input::Keys;
pub use load::Config;
