//! Songbase Lyrics WASM Module
//!
//! Parses lyrics markup with inline chords, transposes chords and lays the
//! chords out above the lyric text for the song-detail page.

pub mod errors;
pub mod models;
pub mod parse;
pub mod transposition;
pub mod renderers;
pub mod controller;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::{AnchorMode, ChordRoot, RenderOptions};
pub use errors::SongError;
pub use controller::SongView;
pub use parse::{parse_song, ParsedSong};
pub use renderers::render_song;
pub use transposition::transpose;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Songbase lyrics WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
