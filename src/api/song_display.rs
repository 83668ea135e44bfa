//! Stateful song-detail view for JavaScript
//!
//! Wraps `SongView` so the page keeps one object per loaded song and calls
//! `render()` after every button press.

use wasm_bindgen::prelude::*;
use crate::api::core::to_js_array;
use crate::api::helpers::{deserialize_or_default, serialize};
use crate::controller::SongView;
use crate::models::RenderOptions;
use crate::wasm_log;

#[wasm_bindgen]
pub struct SongDisplay {
    view: SongView,
}

#[wasm_bindgen]
impl SongDisplay {
    #[wasm_bindgen(constructor)]
    pub fn new(raw_lyrics: &str) -> SongDisplay {
        SongDisplay { view: SongView::new(raw_lyrics) }
    }

    #[wasm_bindgen(js_name = setLyrics)]
    pub fn set_lyrics(&mut self, raw_lyrics: &str) {
        self.view.set_lyrics(raw_lyrics);
    }

    #[wasm_bindgen(js_name = transposeUp)]
    pub fn transpose_up(&mut self) {
        self.view.transpose_up();
    }

    #[wasm_bindgen(js_name = transposeDown)]
    pub fn transpose_down(&mut self) {
        self.view.transpose_down();
    }

    #[wasm_bindgen(js_name = toggleChords)]
    pub fn toggle_chords(&mut self) {
        self.view.toggle_chords();
    }

    #[wasm_bindgen(js_name = toggleChordsEveryVerse)]
    pub fn toggle_chords_every_verse(&mut self) {
        self.view.toggle_chords_every_verse();
    }

    /// Select a tune; `undefined` or `""` shows every tune
    #[wasm_bindgen(js_name = selectTune)]
    pub fn select_tune(&mut self, name: Option<String>) {
        wasm_log!("selectTune: {:?}", name);
        self.view.select_tune(name.as_deref());
    }

    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options_js: JsValue) -> Result<(), JsValue> {
        let options: RenderOptions = deserialize_or_default(options_js, "Render options")?;
        self.view.set_options(options);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn transpose(&self) -> i32 {
        self.view.options().transpose
    }

    #[wasm_bindgen(js_name = tuneNames)]
    pub fn tune_names(&self) -> js_sys::Array {
        to_js_array(&self.view.tune_names())
    }

    pub fn render(&self) -> Result<JsValue, JsValue> {
        serialize(&self.view.render(), "Rendered song serialization error")
    }
}
