//! Reference and capo extraction
//!
//! Scans the whole markup, independent of tune segments.

use lazy_static::lazy_static;
use regex::Regex;
use crate::models::SongMetadata;
use super::segments::split_lines;

lazy_static! {
    static ref REFERENCE_MARKER: Regex = Regex::new(r"^#\s*").unwrap();
    static ref CAPO: Regex = Regex::new(r"(?i)capo[ \t]*(\d+)").unwrap();
}

/// True for lines mentioning a capo, in any case
pub fn is_capo_line(line: &str) -> bool {
    line.to_lowercase().contains("capo")
}

pub fn extract_metadata(raw: &str) -> SongMetadata {
    let reference = split_lines(raw)
        .find(|line| line.starts_with("# ") && !is_capo_line(line))
        .map(|line| REFERENCE_MARKER.replace(line, "").into_owned())
        .unwrap_or_default();

    // Digits are read from the first capo line only, never a later line
    let capo = split_lines(raw)
        .find(|line| is_capo_line(line))
        .and_then(|line| CAPO.captures(line))
        .and_then(|caps| caps[1].parse::<u32>().ok());

    SongMetadata { reference, capo }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_and_capo() {
        let meta = extract_metadata("# My Song\nCapo 2\nVerse [G]one");
        assert_eq!(meta.reference, "My Song");
        assert_eq!(meta.capo, Some(2));
    }

    #[test]
    fn test_capo_heading_is_not_the_reference() {
        let meta = extract_metadata("# capo 4\n# Hebrews 13:8\nwords");
        assert_eq!(meta.reference, "Hebrews 13:8");
        assert_eq!(meta.capo, Some(4));
    }

    #[test]
    fn test_missing_metadata() {
        let meta = extract_metadata("just words\nmore words");
        assert_eq!(meta.reference, "");
        assert_eq!(meta.capo, None);
    }

    #[test]
    fn test_capo_without_number() {
        assert_eq!(extract_metadata("Capo\nline").capo, None);
    }

    #[test]
    fn test_capo_does_not_read_next_line_number() {
        assert_eq!(extract_metadata("Capo\n1\n[G]Line").capo, None);
        assert_eq!(extract_metadata("capo \n2\nwords").capo, None);
    }

    #[test]
    fn test_capo_digits_come_from_first_capo_line() {
        assert_eq!(extract_metadata("Capo 2\nwords\ncapo 5").capo, Some(2));
    }

    #[test]
    fn test_capo_case_and_spacing() {
        assert_eq!(extract_metadata("CAPO3").capo, Some(3));
        assert_eq!(extract_metadata("(capo   5)").capo, Some(5));
    }

    #[test]
    fn test_capo_found_in_tune_segment() {
        let meta = extract_metadata("line\n### Tune\nCapo 1\nmore");
        assert_eq!(meta.capo, Some(1));
    }

    #[test]
    fn test_reference_needs_space_after_hash() {
        assert_eq!(extract_metadata("#tag\n### Tune").reference, "");
    }
}
