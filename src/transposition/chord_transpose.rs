/// Semitone transposition of chord tokens
///
/// A token is the raw content of one `[...]` bracket. It may hold several
/// chords joined by `-` or `/` (`G-D-C-G`, `Am/C`); each chord is shifted on
/// its own and the separators are kept verbatim. The suffix after the root
/// (`m7`, `sus4`, `maj7`) is never touched.
///
/// Example (+2):
///   "G"        → "A"
///   "Bb"       → "C"
///   "Am7/G"    → "Bm7/A"
///   "G-D-C-G"  → "A-E-D-A"

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use crate::models::ChordRoot;

lazy_static! {
    /// Root letter, optional accidental, then everything up to the next separator
    static ref CHORD: Regex = Regex::new(r"([A-G][b#]?)([^-/]*)").unwrap();
}

/// Transpose every chord in `token` by `semitones`
///
/// Unrecognized chords (no A-G root, or a root such as `Cb` that has no
/// sharp spelling) come back exactly as written. Flat roots are respelled
/// as sharps even when `semitones` is 0.
pub fn transpose(token: &str, semitones: i32) -> String {
    if token.is_empty() {
        return String::new();
    }

    CHORD
        .replace_all(token, |caps: &Captures| {
            let root = &caps[1];
            let suffix = &caps[2];
            match root.parse::<ChordRoot>() {
                Ok(root) => format!("{}{}", root.shift(semitones), suffix),
                Err(_) => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Short indicator for the current offset: "" for 0, "+2", "-1"
pub fn transpose_label(semitones: i32) -> String {
    match semitones {
        0 => String::new(),
        n if n > 0 => format!("+{}", n),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_simple() {
        assert_eq!(transpose("G", 2), "A");
        assert_eq!(transpose("B", 1), "C");
        assert_eq!(transpose("C", -1), "B");
    }

    #[test]
    fn test_transpose_keeps_suffix() {
        assert_eq!(transpose("Am7", 3), "Cm7");
        assert_eq!(transpose("Dsus4", 2), "Esus4");
        assert_eq!(transpose("Fmaj7", 1), "F#maj7");
    }

    #[test]
    fn test_flat_roots_become_sharps() {
        assert_eq!(transpose("Bb", 0), "A#");
        assert_eq!(transpose("Eb", 0), "D#");
        assert_eq!(transpose("Bb", 2), "C");
        assert_eq!(transpose("Abm", 1), "Am");
    }

    #[test]
    fn test_multi_chord_tokens() {
        assert_eq!(transpose("G-D-C-G", 2), "A-E-D-A");
        assert_eq!(transpose("Am7/G", 2), "Bm7/A");
        assert_eq!(transpose("D/F#", -2), "C/E");
    }

    #[test]
    fn test_unrecognized_tokens_unchanged() {
        assert_eq!(transpose("x", 5), "x");
        assert_eq!(transpose("Cb", 1), "Cb");
        assert_eq!(transpose("E#", 1), "E#");
        assert_eq!(transpose("x/G", 1), "x/G#");
        assert_eq!(transpose("", 3), "");
    }

    #[test]
    fn test_large_negative_offsets_wrap() {
        assert_eq!(transpose("C", -13), "B");
        assert_eq!(transpose("A", -24), "A");
        assert_eq!(transpose("B", i32::MAX), "F#");
        assert_eq!(transpose("Am7/G", i32::MIN), "C#m7/B");
    }

    #[test]
    fn test_inverse_offsets_round_trip() {
        for token in ["C", "C#m", "D7", "F#sus4", "G-D-C-G", "Am7/G", "Bdim"] {
            for n in -14..=14 {
                assert_eq!(transpose(&transpose(token, n), -n), token, "token {} by {}", token, n);
            }
        }
    }

    #[test]
    fn test_cyclic_in_octaves() {
        for token in ["C", "Bb", "F#m7", "E-A/C#"] {
            for n in -5..=5 {
                assert_eq!(transpose(token, n), transpose(token, n + 12));
            }
        }
    }

    #[test]
    fn test_transpose_label() {
        assert_eq!(transpose_label(0), "");
        assert_eq!(transpose_label(3), "+3");
        assert_eq!(transpose_label(-2), "-2");
    }
}
