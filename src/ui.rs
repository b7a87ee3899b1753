//! Terminal UI for the globber.
//!
//! - [render]: the per-frame painter
//! - [widgets]: the quit confirmation dialog

pub mod render;
pub mod widgets;

pub use render::render;
