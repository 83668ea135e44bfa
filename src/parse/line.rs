//! Line chord extraction
//!
//! The one place that translates raw-markup offsets into clean-text offsets.
//! Everything downstream works purely in clean-text coordinates.
//!
//! # Example
//! ```text
//! raw:    "Verse [G]one [C]two"
//! clean:  "Verse one two"
//! chords: G @ 6, C @ 10
//! ```
//!
//! Offsets are char offsets, so accented lyrics stay aligned in a
//! monospace chord row.

use lazy_static::lazy_static;
use regex::Regex;
use crate::models::{ChordAnchor, Line, SectionHeader};

lazy_static! {
    /// A non-empty bracket span; `[]` and unmatched `[` are left as text
    static ref BRACKET: Regex = Regex::new(r"\[([^\]]+)\]").unwrap();

    /// A whole line that is a single `[Label]`
    static ref LABEL_LINE: Regex = Regex::new(r"^\[([A-Za-z0-9\s-]+)\]$").unwrap();

    static ref SECTION_WORD: Regex = Regex::new(
        r"(?i)^\s*(pre-?chorus|chorus|verse|bridge|refrain|intro|outro|tag|ending|interlude)\b"
    ).unwrap();
}

/// Remove every bracket span from a line
pub fn strip_chords(raw: &str) -> String {
    BRACKET.replace_all(raw, "").into_owned()
}

/// Extract chord anchors and clean text from one markup line
///
/// A chord with nothing after its bracket is pinned just past the last
/// visible clean character, so a trailing chord never lands in trailing
/// whitespace.
pub fn extract_line(raw: &str) -> Line {
    let clean_text = strip_chords(raw);
    let visible_width = clean_text.trim_end().chars().count();

    let mut anchors = Vec::new();
    let mut raw_chars = 0usize; // chars of raw consumed up to `scanned`
    let mut scanned = 0usize; // byte offset into raw
    let mut stripped = 0usize; // bracket chars removed so far

    for caps in BRACKET.captures_iter(raw) {
        let Some(span) = caps.get(0) else { continue };

        raw_chars += raw[scanned..span.end()].chars().count();
        scanned = span.end();
        stripped += span.as_str().chars().count();

        let attaches_to_following_char = raw[span.end()..]
            .chars()
            .next()
            .map_or(false, |c| c != '\n');

        let clean_offset = if attaches_to_following_char {
            raw_chars - stripped
        } else {
            visible_width
        };

        anchors.push(ChordAnchor {
            token: caps[1].to_string(),
            clean_offset,
            attaches_to_following_char,
        });
    }

    Line {
        raw_text: raw.to_string(),
        clean_text,
        anchors,
        is_indented: leading_spaces(raw) >= 2,
        header: None,
    }
}

/// Recognize a `[Chorus]` / `[Verse 2]` label line
///
/// Chord-only lines such as `[G]` or `[Am-D]` are never labels.
pub fn section_header(raw: &str) -> Option<SectionHeader> {
    let caps = LABEL_LINE.captures(raw.trim())?;
    let label = caps[1].trim();
    if !SECTION_WORD.is_match(label) {
        return None;
    }
    Some(SectionHeader {
        label: label.to_string(),
        is_chorus: label.to_lowercase().contains("chorus"),
    })
}

/// Classify a content line: a section label or a lyric line with chords
///
/// Label lines keep the bracket-stripped text but carry no chord anchors,
/// since the bracket holds a label rather than a chord.
pub fn classify_line(raw: &str) -> Line {
    match section_header(raw) {
        Some(header) => Line {
            raw_text: raw.to_string(),
            clean_text: strip_chords(raw),
            anchors: Vec::new(),
            is_indented: leading_spaces(raw) >= 2,
            header: Some(header),
        },
        None => extract_line(raw),
    }
}

fn leading_spaces(raw: &str) -> usize {
    raw.chars().take_while(|&c| c == ' ').count()
}
