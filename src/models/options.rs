//! Render configuration
//!
//! Mirrors the toggles on the song-detail page. Every field has a default so
//! `{}` (or no options at all) renders the song plainly with chords shown.

use serde::{Deserialize, Serialize};
use crate::errors::SongError;

/// Where a verse line takes its chord positions from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorMode {
    /// Every line uses the chords written in its own markup
    PerVerseAnchors,

    /// Numbered verses borrow the chord layout of the first verse
    ReuseFirstVerseAnchors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Semitone offset applied to every chord
    pub transpose: i32,

    /// Tune segment to show; `None` shows every tune segment
    pub selected_tune: Option<String>,

    pub show_chords: bool,

    /// "Show chords on all verses"
    pub chords_every_verse: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            transpose: 0,
            selected_tune: None,
            show_chords: true,
            chords_every_verse: false,
        }
    }
}

impl RenderOptions {
    /// Parse options from a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SongError> {
        if json.trim().is_empty() {
            return Ok(RenderOptions::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        if self.chords_every_verse {
            AnchorMode::ReuseFirstVerseAnchors
        } else {
            AnchorMode::PerVerseAnchors
        }
    }
}
