//! Stateless WASM API
//!
//! One-shot functions for the song-detail page: transpose a chord, pull
//! metadata, list tunes, parse or render a whole song.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::models::RenderOptions;
use crate::{wasm_info, wasm_log};

/// Transpose a chord token (`G`, `Am7/G`, `G-D-C-G`) by `semitones`
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(token: &str, semitones: i32) -> String {
    crate::transposition::transpose(token, semitones)
}

/// Reference line and capo number of the raw lyrics
///
/// # Returns
/// `{ reference: string, capo: number | null }`
#[wasm_bindgen(js_name = extractMetadata)]
pub fn extract_metadata(raw_lyrics: &str) -> Result<JsValue, JsValue> {
    let metadata = crate::parse::extract_metadata(raw_lyrics);
    serialize(&metadata, "Metadata serialization error")
}

/// Distinct tune names, in the order they first appear
#[wasm_bindgen(js_name = getTuneNames)]
pub fn get_tune_names(raw_lyrics: &str) -> js_sys::Array {
    let names = crate::parse::tune_names(&crate::parse::segment(raw_lyrics));
    wasm_log!("getTuneNames: {} tunes", names.len());
    to_js_array(&names)
}

/// Copy strings into a JavaScript array
pub fn to_js_array(items: &[String]) -> js_sys::Array {
    let array = js_sys::Array::new();
    for item in items {
        array.push(&JsValue::from_str(item));
    }
    array
}

/// Parse lyrics into metadata, segments and verses without rendering chords
///
/// # Parameters
/// - `raw_lyrics`: lyrics markup
/// - `selected_tune`: tune to keep, or `undefined` for every tune
#[wasm_bindgen(js_name = parseSong)]
pub fn parse_song(raw_lyrics: &str, selected_tune: Option<String>) -> Result<JsValue, JsValue> {
    let parsed = crate::parse::parse_song(raw_lyrics, selected_tune.as_deref());
    wasm_log!("parseSong: {} segments, {} verses", parsed.segments.len(), parsed.verses.len());
    serialize(&parsed, "Parsed song serialization error")
}

/// Render lyrics with chord rows
///
/// # Parameters
/// - `raw_lyrics`: lyrics markup
/// - `options_js`: `{ transpose, selectedTune, showChords, chordsEveryVerse }`,
///   any field may be omitted; `undefined` means all defaults
#[wasm_bindgen(js_name = renderSong)]
pub fn render_song(raw_lyrics: &str, options_js: JsValue) -> Result<JsValue, JsValue> {
    let options: RenderOptions = deserialize_or_default(options_js, "Render options")?;
    wasm_info!(
        "renderSong called: {} bytes, transpose={}, tune={:?}",
        raw_lyrics.len(),
        options.transpose,
        options.selected_tune
    );

    let song = crate::renderers::render_song(raw_lyrics, &options);
    serialize(&song, "Rendered song serialization error")
}

/// Same as `renderSong`, with JSON in and JSON out
#[wasm_bindgen(js_name = renderSongJson)]
pub fn render_song_json(raw_lyrics: &str, options_json: &str) -> Result<String, JsValue> {
    let options = RenderOptions::from_json(options_json).map_err(to_js_error)?;
    let song = crate::renderers::render_song(raw_lyrics, &options);

    serde_json::to_string(&song)
        .map_err(|e| to_js_error(crate::errors::SongError::Serialization(e.to_string())))
}
