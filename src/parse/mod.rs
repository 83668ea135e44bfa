//! Parsing module for lyrics markup
//!
//! Turns the raw lyrics string into metadata, tune segments and verses of
//! chord-annotated lines. Parsing never fails: malformed markup degrades to
//! plain text.

pub mod segments;
pub mod metadata;
pub mod line;
pub mod verses;

// Re-export commonly used functions
pub use segments::{segment, tune_names};
pub use metadata::extract_metadata;
pub use line::{extract_line, classify_line, section_header, strip_chords};
pub use verses::{assemble, VerseAssembler};

use serde::{Deserialize, Serialize};
use crate::models::{Segment, SongMetadata, Verse};

/// Full parse of one song, before any chord rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSong {
    pub metadata: SongMetadata,
    pub segments: Vec<Segment>,
    pub tune_names: Vec<String>,
    pub verses: Vec<Verse>,
}

/// Parse markup for the given tune (`None` keeps every tune segment)
pub fn parse_song(raw: &str, selected_tune: Option<&str>) -> ParsedSong {
    if raw.is_empty() {
        return ParsedSong::default();
    }

    let segments = segment(raw);
    let tune_names = tune_names(&segments);
    let verses = assemble(&segments, selected_tune);

    ParsedSong {
        metadata: extract_metadata(raw),
        segments,
        tune_names,
        verses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_song_empty() {
        let parsed = parse_song("", None);
        assert!(parsed.verses.is_empty());
        assert!(parsed.segments.is_empty());
        assert_eq!(parsed.metadata, SongMetadata::default());
    }

    #[test]
    fn test_parse_song_is_deterministic() {
        let raw = "# Ref\n1\n[G]a [C]b\n\n  [D]chorus\n### T1\n2\nx[E]y";
        assert_eq!(parse_song(raw, Some("T1")), parse_song(raw, Some("T1")));
    }

    #[test]
    fn test_parse_song_collects_everything() {
        let parsed = parse_song("# Ref\nCapo 1\n### A\n[G]one\n### B\n[C]two", Some("A"));
        assert_eq!(parsed.metadata.reference, "Ref");
        assert_eq!(parsed.metadata.capo, Some(1));
        assert_eq!(parsed.tune_names, vec!["A", "B"]);
        assert_eq!(parsed.verses.len(), 1);
        assert_eq!(parsed.verses[0].lines[0].clean_text, "one");
    }
}
