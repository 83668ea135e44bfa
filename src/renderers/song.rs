//! Full render pass over one song
//!
//! Re-parses the markup every time; nothing is cached between renders.

use crate::models::{RenderOptions, RenderedSong};
use crate::parse::parse_song;
use crate::transposition::transpose_label;
use super::chord_line::{render_verse, AnchorTemplate};

/// Render `raw` lyrics with the given options
///
/// Empty markup renders to an empty song: no verses, no metadata.
pub fn render_song(raw: &str, options: &RenderOptions) -> RenderedSong {
    let selected_tune = options.selected_tune.as_deref();
    let parsed = parse_song(raw, selected_tune);

    // One template per pass, taken from the first assembled verse
    let template = AnchorTemplate::from_verses(&parsed.verses);
    let mode = options.anchor_mode();

    let verses = parsed
        .verses
        .iter()
        .map(|verse| render_verse(verse, options.transpose, mode, &template))
        .collect();

    log::debug!(
        "rendered song: {} verses, transpose {}, mode {:?}",
        parsed.verses.len(),
        options.transpose,
        mode
    );

    RenderedSong {
        capo_label: parsed.metadata.capo_label(),
        reference: parsed.metadata.reference,
        capo: parsed.metadata.capo,
        show_tune_selector: parsed.tune_names.len() >= 2,
        tune_names: parsed.tune_names,
        selected_tune: options.selected_tune.clone(),
        show_chords: options.show_chords,
        transpose_label: transpose_label(options.transpose),
        verses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let song = render_song("", &RenderOptions::default());
        assert!(song.verses.is_empty());
        assert_eq!(song.reference, "");
        assert_eq!(song.capo, None);
        assert!(song.tune_names.is_empty());
        assert!(!song.show_tune_selector);
    }

    #[test]
    fn test_render_metadata_and_labels() {
        let options = RenderOptions { transpose: -2, ..RenderOptions::default() };
        let song = render_song("# Ref\nCapo 2\n[A]la", &options);
        assert_eq!(song.reference, "Ref");
        assert_eq!(song.capo_label.as_deref(), Some("Capo 2"));
        assert_eq!(song.transpose_label, "-2");
        assert_eq!(song.verses[0].lines[0].chord_row, "G ");
    }

    #[test]
    fn test_selector_needs_two_tunes() {
        let one = render_song("### Only\nx", &RenderOptions::default());
        assert!(!one.show_tune_selector);
        let two = render_song("### A\nx\n### B\ny", &RenderOptions::default());
        assert!(two.show_tune_selector);
    }
}
