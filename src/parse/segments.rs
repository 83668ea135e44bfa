//! Markup segmentation
//!
//! Splits raw lyrics into the common body plus one segment per `### <name>`
//! tune heading. Heading lines are structure and never appear in a segment.

use lazy_static::lazy_static;
use regex::Regex;
use crate::models::Segment;

lazy_static! {
    static ref TUNE_HEADING: Regex = Regex::new(r"^#{3}\s*(.+)\s*$").unwrap();
}

/// Split markup into lines, tolerating CRLF line endings
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Tune name if `line` is a `###` heading
pub fn tune_heading(line: &str) -> Option<String> {
    TUNE_HEADING
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
}

/// Partition markup into segments in source order
///
/// The first segment is always the common one, even when the markup opens
/// with a heading. Tune names are kept as written, duplicates included.
pub fn segment(raw: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = Segment::common();

    if raw.is_empty() {
        return vec![current];
    }

    for line in split_lines(raw) {
        match tune_heading(line) {
            Some(name) => {
                log::trace!("tune segment opened: '{}'", name);
                segments.push(current);
                current = Segment::tune(name);
            }
            None => current.lines.push(line.to_string()),
        }
    }

    segments.push(current);
    segments
}

/// Distinct tune names in first-seen order
pub fn tune_names(segments: &[Segment]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in segments.iter().filter_map(Segment::tune_name) {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentKind;

    #[test]
    fn test_no_headings_single_common_segment() {
        let segments = segment("line one\nline two");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Common);
        assert_eq!(segments[0].lines, vec!["line one", "line two"]);
    }

    #[test]
    fn test_empty_input() {
        let segments = segment("");
        assert_eq!(segments, vec![Segment::common()]);
    }

    #[test]
    fn test_headings_open_tune_segments() {
        let segments = segment("intro\n### Tune A\na1\na2\n###  Tune B  \nb1");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].lines, vec!["intro"]);
        assert_eq!(segments[1].kind, SegmentKind::Tune("Tune A".to_string()));
        assert_eq!(segments[1].lines, vec!["a1", "a2"]);
        assert_eq!(segments[2].kind, SegmentKind::Tune("Tune B".to_string()));
        assert_eq!(segments[2].lines, vec!["b1"]);
    }

    #[test]
    fn test_leading_heading_leaves_empty_common() {
        let segments = segment("### Only\nx");
        assert_eq!(segments[0], Segment::common());
        assert_eq!(segments[1].tune_name(), Some("Only"));
    }

    #[test]
    fn test_reference_line_is_not_a_heading() {
        assert_eq!(tune_heading("# Psalm 23"), None);
        assert_eq!(tune_heading("## Subtitle"), None);
        assert_eq!(tune_heading("###Tight"), Some("Tight".to_string()));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let segments = segment("a\r\nb\r\n");
        assert_eq!(segments[0].lines, vec!["a", "b", ""]);
    }

    #[test]
    fn test_tune_names_dedup_in_order() {
        let segments = segment("### B\n1\n### A\n2\n### B\n3");
        assert_eq!(segments.len(), 4);
        assert_eq!(tune_names(&segments), vec!["B", "A"]);
    }
}
