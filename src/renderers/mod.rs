//! Renderers module for the lyrics display
//!
//! Turns parsed verses into aligned chord rows and lyric rows.

pub mod chord_line;
pub mod song;

// Re-export commonly used types
pub use chord_line::{render_chord_row, render_line, render_verse, AnchorTemplate};
pub use song::render_song;
