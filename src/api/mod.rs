//! Songbase lyrics WASM API
//!
//! JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `core`: stateless functions (transpose, metadata, parse, render)
//! - `song_display`: `SongDisplay` class holding per-song view state

pub mod helpers;
pub mod core;
pub mod song_display;

pub use core::*;
pub use song_display::SongDisplay;
