/// Chord roots on the 12-tone chromatic cycle
///
/// Only sharp spellings exist here. Flat roots are folded onto their
/// enharmonic sharp (Db → C#, Eb → D#, Gb → F#, Ab → G#, Bb → A#) when
/// parsed, so transposed chords always come out sharp.
///
/// Cb, Fb, E# and B# are not recognized; chords using them are left alone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordRoot {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

/// Chromatic order starting at C
pub const CHROMATIC: [ChordRoot; 12] = [
    ChordRoot::C,
    ChordRoot::Cs,
    ChordRoot::D,
    ChordRoot::Ds,
    ChordRoot::E,
    ChordRoot::F,
    ChordRoot::Fs,
    ChordRoot::G,
    ChordRoot::Gs,
    ChordRoot::A,
    ChordRoot::As,
    ChordRoot::B,
];

impl ChordRoot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordRoot::C => "C",
            ChordRoot::Cs => "C#",
            ChordRoot::D => "D",
            ChordRoot::Ds => "D#",
            ChordRoot::E => "E",
            ChordRoot::F => "F",
            ChordRoot::Fs => "F#",
            ChordRoot::G => "G",
            ChordRoot::Gs => "G#",
            ChordRoot::A => "A",
            ChordRoot::As => "A#",
            ChordRoot::B => "B",
        }
    }

    /// Position in the chromatic cycle (C = 0 .. B = 11)
    pub fn pitch_class(&self) -> usize {
        // Variants are declared in chromatic order
        *self as usize
    }

    /// Shift by a signed number of semitones, wrapping around the octave
    pub fn shift(&self, semitones: i32) -> ChordRoot {
        let index = (self.pitch_class() as i32 + semitones.rem_euclid(12)).rem_euclid(12);
        CHROMATIC[index as usize]
    }
}

impl fmt::Display for ChordRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChordRoot {
    type Err = String;

    /// Case-sensitive: `b` is the flat sign, so `Bb` and `bb` must not collide
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(ChordRoot::C),
            "C#" | "Db" => Ok(ChordRoot::Cs),
            "D" => Ok(ChordRoot::D),
            "D#" | "Eb" => Ok(ChordRoot::Ds),
            "E" => Ok(ChordRoot::E),
            "F" => Ok(ChordRoot::F),
            "F#" | "Gb" => Ok(ChordRoot::Fs),
            "G" => Ok(ChordRoot::G),
            "G#" | "Ab" => Ok(ChordRoot::Gs),
            "A" => Ok(ChordRoot::A),
            "A#" | "Bb" => Ok(ChordRoot::As),
            "B" => Ok(ChordRoot::B),
            _ => Err(format!("Unrecognized chord root: '{}'", s)),
        }
    }
}
