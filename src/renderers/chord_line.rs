//! Chord/lyric alignment
//!
//! Builds a monospace chord row for each lyric line: a space-filled buffer
//! wide enough for the lyric and for any chord that overhangs its end, with
//! each transposed chord written at its clean-text offset.

use serde::{Deserialize, Serialize};
use crate::models::{AnchorMode, ChordAnchor, Line, RenderedLine, RenderedVerse, Verse};
use crate::transposition::transpose;

/// Chord positions captured from the first verse, one list per line index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorTemplate {
    pub lines: Vec<Vec<ChordAnchor>>,
}

impl AnchorTemplate {
    /// Snapshot the first verse of a render pass, numbered or not
    pub fn from_verses(verses: &[Verse]) -> Self {
        let lines = verses
            .first()
            .map(|verse| verse.lines.iter().map(|line| line.anchors.clone()).collect())
            .unwrap_or_default();
        AnchorTemplate { lines }
    }

    /// Anchors for `line_index`, re-marked as attached to a following char
    pub fn anchors_for(&self, line_index: usize) -> Option<Vec<ChordAnchor>> {
        self.lines.get(line_index).map(|anchors| {
            anchors
                .iter()
                .map(|anchor| ChordAnchor {
                    attaches_to_following_char: true,
                    ..anchor.clone()
                })
                .collect()
        })
    }
}

/// Render the chord row for `clean_text`
///
/// When two chords share an offset the later one overwrites the earlier,
/// matching left-to-right placement.
pub fn render_chord_row(clean_text: &str, anchors: &[ChordAnchor], semitones: i32) -> String {
    let placed: Vec<(usize, Vec<char>)> = anchors
        .iter()
        .map(|anchor| (anchor.clean_offset, transpose(&anchor.token, semitones).chars().collect()))
        .collect();

    let width = placed
        .iter()
        .map(|(offset, chord)| offset + chord.len())
        .fold(clean_text.chars().count(), usize::max);

    let mut row = vec![' '; width];
    for (offset, chord) in &placed {
        for (i, ch) in chord.iter().enumerate() {
            row[offset + i] = *ch;
        }
    }

    row.into_iter().collect()
}

/// Render one line with an explicit anchor set
pub fn render_line(line: &Line, anchors: &[ChordAnchor], semitones: i32) -> RenderedLine {
    RenderedLine {
        chord_row: render_chord_row(&line.clean_text, anchors, semitones),
        lyric_row: line.clean_text.clone(),
        is_indented: line.is_indented,
        header: line.header.clone(),
    }
}

/// Render every line of a verse
///
/// Under `ReuseFirstVerseAnchors`, lines of numbered verses take their chords
/// from the same line index of the first verse when that line exists. Label
/// lines and unnumbered verses always keep their own chords.
pub fn render_verse(
    verse: &Verse,
    semitones: i32,
    mode: AnchorMode,
    template: &AnchorTemplate,
) -> RenderedVerse {
    let reuse = mode == AnchorMode::ReuseFirstVerseAnchors && verse.is_numbered;

    let lines = verse
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let borrowed = if reuse && line.header.is_none() {
                template.anchors_for(index)
            } else {
                None
            };
            match borrowed {
                Some(anchors) => render_line(line, &anchors, semitones),
                None => render_line(line, &line.anchors, semitones),
            }
        })
        .collect();

    RenderedVerse {
        is_numbered: verse.is_numbered,
        number: verse.number,
        lines,
    }
}
