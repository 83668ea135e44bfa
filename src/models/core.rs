//! Core data structures for parsed lyrics
//!
//! Everything here is a plain value recomputed from the raw markup on each
//! parse. Nothing is shared or cached between renders.

use serde::{Deserialize, Serialize};

/// Which part of the markup a segment belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "camelCase")]
pub enum SegmentKind {
    /// Lines before the first `###` heading (tune independent)
    Common,

    /// Lines under a `### <name>` heading
    Tune(String),
}

/// A contiguous block of markup lines belonging to one tune variant or the common body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub lines: Vec<String>,
}

impl Segment {
    pub fn common() -> Self {
        Segment { kind: SegmentKind::Common, lines: Vec::new() }
    }

    pub fn tune(name: impl Into<String>) -> Self {
        Segment { kind: SegmentKind::Tune(name.into()), lines: Vec::new() }
    }

    /// Tune name, or `None` for the common segment
    pub fn tune_name(&self) -> Option<&str> {
        match &self.kind {
            SegmentKind::Common => None,
            SegmentKind::Tune(name) => Some(name.as_str()),
        }
    }
}

/// A chord annotation pinned to a character offset of the clean lyric text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordAnchor {
    /// Raw bracket content, e.g. `G`, `Am7`, `G-D-C-G`
    pub token: String,

    /// Char offset into the bracket-stripped line
    pub clean_offset: usize,

    /// False for a trailing chord with nothing after its bracket
    pub attaches_to_following_char: bool,
}

/// A `[Chorus]`-style label line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeader {
    pub label: String,
    pub is_chorus: bool,
}

/// One lyric line with its chord anchors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub raw_text: String,
    pub clean_text: String,
    pub anchors: Vec<ChordAnchor>,

    /// Two or more leading spaces (chorus indentation)
    pub is_indented: bool,

    pub header: Option<SectionHeader>,
}

/// A block of lines, numbered when introduced by a digits-only marker line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub is_numbered: bool,
    pub number: Option<u32>,
    pub lines: Vec<Line>,
}

/// A lyric line paired with its monospace chord row
///
/// Char `i` of `chord_row` sits above char `i` of `lyric_row`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLine {
    pub chord_row: String,
    pub lyric_row: String,
    pub is_indented: bool,
    pub header: Option<SectionHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedVerse {
    pub is_numbered: bool,
    pub number: Option<u32>,
    pub lines: Vec<RenderedLine>,
}

/// Reference line and capo directive pulled from the whole markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongMetadata {
    pub reference: String,
    pub capo: Option<u32>,
}

impl SongMetadata {
    /// Display text for the capo directive, e.g. `Capo 2`
    pub fn capo_label(&self) -> Option<String> {
        self.capo.map(|capo| format!("Capo {}", capo))
    }
}

/// Everything the song-detail view needs for one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSong {
    pub reference: String,
    pub capo: Option<u32>,
    pub capo_label: Option<String>,
    pub tune_names: Vec<String>,

    /// The tune selector is only worth showing with two or more tunes
    pub show_tune_selector: bool,

    pub selected_tune: Option<String>,

    /// Chord rows are always computed; the view hides them when false
    pub show_chords: bool,

    pub transpose_label: String,
    pub verses: Vec<RenderedVerse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_tune_name() {
        assert_eq!(Segment::common().tune_name(), None);
        assert_eq!(Segment::tune("Tune A").tune_name(), Some("Tune A"));
    }

    #[test]
    fn test_capo_label() {
        let meta = SongMetadata { reference: String::new(), capo: Some(3) };
        assert_eq!(meta.capo_label().as_deref(), Some("Capo 3"));
        assert_eq!(SongMetadata::default().capo_label(), None);
    }

    #[test]
    fn test_rendered_line_serializes_camel_case() {
        let line = RenderedLine {
            chord_row: "G".to_string(),
            lyric_row: "Go".to_string(),
            is_indented: false,
            header: None,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"chordRow\":\"G\""));
        assert!(json.contains("\"lyricRow\":\"Go\""));
    }
}
