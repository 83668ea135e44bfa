//! WASM API tests
//!
//! Exercises the JavaScript-facing functions in a browser.

#![cfg(target_arch = "wasm32")]

use songbase_lyrics::api::*;
use songbase_lyrics::RenderedSong;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_transpose_chord() {
    assert_eq!(transpose_chord("G-D-C-G", 2), "A-E-D-A");
    assert_eq!(transpose_chord("Bb", 0), "A#");
}

#[wasm_bindgen_test]
fn test_render_song_default_options() {
    let result = render_song("# Ref\n[G]Hello", JsValue::UNDEFINED).unwrap();
    let song: RenderedSong = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(song.reference, "Ref");
    assert_eq!(song.verses[0].lines[0].chord_row, "G    ");
}

#[wasm_bindgen_test]
fn test_render_song_json_rejects_bad_options() {
    assert!(render_song_json("[G]x", "{\"transpose\": \"up\"}").is_err());
    let json = render_song_json("[G]x", "{\"transpose\": 1}").unwrap();
    assert!(json.contains("\"chordRow\":\"G#\""));
}

#[wasm_bindgen_test]
fn test_song_display_state() {
    let mut display = SongDisplay::new("### A\n[G]x\n### B\n[C]y");
    display.transpose_up();
    assert_eq!(display.transpose(), 1);
    display.select_tune(Some("B".to_string()));
    let song: RenderedSong = serde_wasm_bindgen::from_value(display.render().unwrap()).unwrap();
    assert_eq!(song.verses[0].lines[0].chord_row, "C#");
}
