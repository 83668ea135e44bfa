//! Verse assembly - explicit FSM over the filtered markup lines
//!
//! States:
//! - `Idle`: nothing buffered, no pending verse number
//! - `Pending`: a verse number and/or lyric lines are waiting to be flushed
//!
//! Transitions:
//! - digits-only line → flush buffered lines, then pend the new number
//! - blank line       → flush buffered lines and drop the number
//! - content line     → buffer it
//! - end of segment / input → same as a blank line
//!
//! A flush with an empty buffer is a no-op, so empty verses are never
//! emitted and consecutive number markers just replace the pending number.

use crate::models::{Line, Segment, SegmentKind, Verse};
use super::line::classify_line;
use super::metadata::is_capo_line;

#[derive(Debug, Clone, PartialEq)]
enum AssemblerState {
    Idle,
    Pending { number: Option<u32>, lines: Vec<Line> },
}

/// Folds markup lines into verses
#[derive(Debug)]
pub struct VerseAssembler {
    state: AssemblerState,
    verses: Vec<Verse>,
}

impl Default for VerseAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl VerseAssembler {
    pub fn new() -> Self {
        VerseAssembler { state: AssemblerState::Idle, verses: Vec::new() }
    }

    /// Feed one raw markup line
    pub fn push_line(&mut self, raw: &str) {
        // Reference and capo lines were already consumed as metadata
        if raw.starts_with('#') || is_capo_line(raw) {
            return;
        }

        let trimmed = raw.trim();

        if is_verse_marker(trimmed) {
            self.flush();
            let number = trimmed.parse::<u32>().ok();
            self.state = AssemblerState::Pending { number, lines: Vec::new() };
            return;
        }

        if trimmed.is_empty() {
            self.flush();
            return;
        }

        let line = classify_line(raw);
        if let AssemblerState::Pending { lines, .. } = &mut self.state {
            lines.push(line);
        } else {
            self.state = AssemblerState::Pending { number: None, lines: vec![line] };
        }
    }

    /// Close the current segment; buffered lines become a verse
    pub fn end_segment(&mut self) {
        self.flush();
    }

    /// Flush anything left and return the assembled verses
    pub fn finish(mut self) -> Vec<Verse> {
        self.flush();
        self.verses
    }

    /// Emit the buffered verse if it has lines; a bare pending number survives
    fn flush(&mut self) {
        let has_lines = matches!(&self.state, AssemblerState::Pending { lines, .. } if !lines.is_empty());
        if !has_lines {
            return;
        }

        if let AssemblerState::Pending { number, lines } =
            std::mem::replace(&mut self.state, AssemblerState::Idle)
        {
            log::trace!("verse flushed: number={:?}, {} lines", number, lines.len());
            self.verses.push(Verse {
                // A `0` marker does not label the verse
                is_numbered: number.map_or(false, |n| n != 0),
                number,
                lines,
            });
        }
    }
}

/// A trimmed line made only of ASCII digits
fn is_verse_marker(trimmed: &str) -> bool {
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Whether a segment takes part in the render for the selected tune
///
/// The common segment always does. With no tune selected every tune segment
/// is kept.
pub fn segment_selected(segment: &Segment, selected_tune: Option<&str>) -> bool {
    match (&segment.kind, selected_tune) {
        (SegmentKind::Common, _) => true,
        (SegmentKind::Tune(_), None) => true,
        (SegmentKind::Tune(name), Some(selected)) => name == selected,
    }
}

/// Group the selected segments' lines into verses
pub fn assemble(segments: &[Segment], selected_tune: Option<&str>) -> Vec<Verse> {
    let mut assembler = VerseAssembler::new();

    for segment in segments.iter().filter(|s| segment_selected(s, selected_tune)) {
        for raw in &segment.lines {
            assembler.push_line(raw);
        }
        assembler.end_segment();
    }

    let verses = assembler.finish();
    log::debug!(
        "assembled {} verses (tune filter: {:?})",
        verses.len(),
        selected_tune
    );
    verses
}
