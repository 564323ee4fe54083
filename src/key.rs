//! Key signatures.
//!
//! A key is one of a closed set of 34 identities (17 major, 17 minor).
//! `K:` header values resolve through a fixed alias table covering the
//! major name, the relative minor, and the six church modes of each tonic;
//! every alias of a tonic collapses to the same major identity, so `K:Em`,
//! `K:Dmix`, and `K:G` all parse to [`Key::G`].
//!
//! Each identity owns a fixed set of accidental pitch names. The note
//! resolver substitutes a set entry for any bare letter that matches its
//! first character, which is how a key signature sharpens or flattens an
//! entire tune without per-note accidentals.

use serde::Serialize;

/// A key identity: tonic plus major/minor quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Key {
    // Major
    #[default]
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
    A,
    ASharp,
    BFlat,
    B,
    // Minor
    CMinor,
    CSharpMinor,
    DFlatMinor,
    DMinor,
    DSharpMinor,
    EFlatMinor,
    EMinor,
    FMinor,
    FSharpMinor,
    GFlatMinor,
    GMinor,
    GSharpMinor,
    AFlatMinor,
    AMinor,
    ASharpMinor,
    BFlatMinor,
    BMinor,
}

/// Every spelling a `K:` header may use, lowercased: major name, relative
/// minor, and the six modes of each tonic. The last alias of the F, Bb,
/// and Eb rows is a single string containing a space ("bblyd eloc" and
/// friends); those lydian/locrian spellings only match in that combined
/// form. The table is kept exactly as shipped so that the set of inputs
/// it accepts never drifts.
const KEY_ALIASES: &[(Key, &[&str])] = &[
    (Key::CSharp, &["c#", "a#m", "g#mix", "d#dor", "e#phr", "f#lyd", "b#loc"]),
    (Key::FSharp, &["f#", "d#m", "c#mix", "g#dor", "a#phr", "blyd", "e#loc"]),
    (Key::B, &["b", "g#m", "f#mix", "c#dor", "d#phr", "elyd", "a#loc"]),
    (Key::E, &["e", "c#m", "bmix", "f#dor", "g#phr", "alyd", "d#loc"]),
    (Key::A, &["a", "f#m", "emix", "bdor", "c#phr", "dlyd", "g#loc"]),
    (Key::D, &["d", "bm", "amix", "edor", "f#phr", "glyd", "c#loc"]),
    (Key::G, &["g", "em", "dmix", "ador", "bphr", "clyd", "f#loc"]),
    (Key::C, &["c", "am", "gmix", "ddor", "ephr", "flyd", "bloc"]),
    (Key::F, &["f", "dm", "cmix", "gdor", "aphr", "bblyd eloc"]),
    (Key::BFlat, &["bb", "gm", "fmix", "cdor", "dphr", "eblyd aloc"]),
    (Key::EFlat, &["eb", "cm", "bbmix", "fdor", "gphr", "ablyd dloc"]),
    (Key::AFlat, &["ab", "fm", "ebmix", "bbdor", "cphr", "dblyd", "gloc"]),
    (Key::DFlat, &["db", "bbm", "abmix", "ebdor", "fphr", "gblyd", "cloc"]),
    (Key::GFlat, &["gb", "ebm", "dbmix", "abdor", "bbphr", "cblyd", "floc"]),
];

impl Key {
    /// Parse a `K:` header value (case-insensitive, surrounding whitespace
    /// ignored). Minor and modal spellings resolve to the relative major
    /// identity, which carries the same accidental set.
    pub fn from_str(s: &str) -> Option<Self> {
        let needle = s.trim().to_ascii_lowercase();
        for (key, aliases) in KEY_ALIASES {
            if aliases.contains(&needle.as_str()) {
                return Some(*key);
            }
        }
        None
    }

    /// The accidental pitch names this key applies to bare letters.
    ///
    /// The sets are fixed data, quirks included: the sharp keys list a
    /// plain `"G"` rather than `"G#"`, and the spellings `"E#"`, `"B#"`,
    /// and the flat names have no pitch-table entry, so letters they
    /// capture fail resolution. Edit with care; every entry changes which
    /// tunes parse.
    pub fn accidentals(self) -> &'static [&'static str] {
        match self {
            Key::C | Key::AMinor => &[],
            Key::CSharp | Key::DFlat | Key::BFlatMinor | Key::ASharpMinor => {
                &["F#", "C#", "G", "D#", "A#", "E#", "B#"]
            }
            Key::D | Key::BMinor => &["F#", "C#"],
            Key::EFlat | Key::DSharp | Key::CMinor => &["Bb", "Eb", "Ab"],
            Key::E | Key::CSharpMinor | Key::DFlatMinor => &["F#", "C#", "G", "D#"],
            Key::F | Key::DMinor => &["Bb"],
            Key::FSharp | Key::GFlat | Key::EFlatMinor | Key::DSharpMinor => {
                &["F#", "C#", "G", "D#", "A#", "E#"]
            }
            Key::G | Key::EMinor => &["F#"],
            Key::AFlat | Key::GSharp | Key::FMinor => &["Bb", "Eb", "Ab", "Db"],
            Key::A | Key::GFlatMinor | Key::FSharpMinor => &["F#", "C#", "G"],
            Key::BFlat | Key::ASharp | Key::GMinor => &["Bb", "Eb"],
            Key::B | Key::AFlatMinor | Key::GSharpMinor => &["F#", "C#", "G", "D#", "A#"],
        }
    }

    /// Canonical short spelling, `"C#"`, `"Bbm"`, and so on.
    pub fn name(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::CSharp => "C#",
            Key::DFlat => "Db",
            Key::D => "D",
            Key::DSharp => "D#",
            Key::EFlat => "Eb",
            Key::E => "E",
            Key::F => "F",
            Key::FSharp => "F#",
            Key::GFlat => "Gb",
            Key::G => "G",
            Key::GSharp => "G#",
            Key::AFlat => "Ab",
            Key::A => "A",
            Key::ASharp => "A#",
            Key::BFlat => "Bb",
            Key::B => "B",
            Key::CMinor => "Cm",
            Key::CSharpMinor => "C#m",
            Key::DFlatMinor => "Dbm",
            Key::DMinor => "Dm",
            Key::DSharpMinor => "D#m",
            Key::EFlatMinor => "Ebm",
            Key::EMinor => "Em",
            Key::FMinor => "Fm",
            Key::FSharpMinor => "F#m",
            Key::GFlatMinor => "Gbm",
            Key::GMinor => "Gm",
            Key::GSharpMinor => "G#m",
            Key::AFlatMinor => "Abm",
            Key::AMinor => "Am",
            Key::ASharpMinor => "A#m",
            Key::BFlatMinor => "Bbm",
            Key::BMinor => "Bm",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
