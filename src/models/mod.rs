//! Models module for the lyrics display
//!
//! Data structures produced by the markup parser and consumed by the
//! chord/lyric renderer, plus the render configuration.

pub mod core;
pub mod chord;
pub mod options;

// Re-export commonly used types
pub use core::*;
pub use chord::ChordRoot;
pub use options::{AnchorMode, RenderOptions};
