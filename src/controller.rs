//! Song-detail view state
//!
//! Holds the raw lyrics and the user's toggles. Every render re-parses the
//! markup from scratch.

use crate::models::{RenderOptions, RenderedSong};
use crate::parse::{segment, tune_names};
use crate::renderers::render_song;

#[derive(Debug, Clone, Default)]
pub struct SongView {
    raw: String,
    options: RenderOptions,
}

impl SongView {
    pub fn new(raw: &str) -> Self {
        let mut view = SongView::default();
        view.set_lyrics(raw);
        view
    }

    /// Load new lyrics; selection falls back to the first tune, if any
    pub fn set_lyrics(&mut self, raw: &str) {
        self.raw = raw.to_string();
        self.options.selected_tune = self.tune_names().into_iter().next();
        log::debug!("lyrics loaded, selected tune: {:?}", self.options.selected_tune);
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace the toggles wholesale, e.g. when restoring saved options
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn tune_names(&self) -> Vec<String> {
        tune_names(&segment(&self.raw))
    }

    pub fn transpose_up(&mut self) {
        self.options.transpose = self.options.transpose.saturating_add(1);
    }

    pub fn transpose_down(&mut self) {
        self.options.transpose = self.options.transpose.saturating_sub(1);
    }

    pub fn toggle_chords(&mut self) {
        self.options.show_chords = !self.options.show_chords;
    }

    pub fn toggle_chords_every_verse(&mut self) {
        self.options.chords_every_verse = !self.options.chords_every_verse;
    }

    /// Select a tune by name; an empty name clears the filter
    pub fn select_tune(&mut self, name: Option<&str>) {
        self.options.selected_tune = name
            .filter(|name| !name.is_empty())
            .map(str::to_string);
    }

    pub fn render(&self) -> RenderedSong {
        render_song(&self.raw, &self.options)
    }
}
