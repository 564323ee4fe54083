//! The parsed song document.
//!
//! A [`Song`] is header metadata plus two parallel vectors describing the
//! tune body: `note_values[i]` is the pitch-table index of the i-th event
//! (or [`REST`](crate::pitch::REST)) and `note_lengths[i]` its duration
//! multiplier. The vectors always grow together; use [`Song::push_event`].

use serde::Serialize;

use crate::key::Key;

/// Exact duration arithmetic. Durations are never binary floats; `1/8` and
/// `3/2` stay the fractions the notation wrote.
pub type Rational = num_rational::Rational32;

/// A meter (time signature), `beats` per measure over a `unit` note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meter {
    pub beats: u8,
    pub unit: u8,
}

impl Meter {
    /// Parse an `M:` header value: `C` (common time), `C|` (cut time), or
    /// `beats/unit`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "C" => Some(Self { beats: 4, unit: 4 }),
            "C|" => Some(Self { beats: 2, unit: 2 }),
            _ => {
                let (beats, unit) = s.split_once('/')?;
                Some(Self {
                    beats: beats.trim().parse().ok()?,
                    unit: unit.trim().parse().ok()?,
                })
            }
        }
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self { beats: 4, unit: 4 }
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.beats, self.unit)
    }
}

/// One parsed tune: the header fields plus the note events in temporal
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    /// `X:` reference number; 0 when absent or non-numeric.
    pub number: i32,
    pub title: String,
    pub composer: String,
    pub meter: Meter,
    /// `L:` base duration every note length multiplies; 0 until set.
    pub unit_note_length: Rational,
    pub rhythm: String,
    pub key: Key,
    pub origin: String,
    /// `Q:` beats per minute; 0 when absent or non-numeric.
    pub tempo: i32,
    /// Pitch-table index per event, `-1` for rests. Parallel to
    /// `note_lengths`.
    pub note_values: Vec<i32>,
    /// Duration multiplier per event. Parallel to `note_values`.
    pub note_lengths: Vec<Rational>,
}

impl Song {
    pub fn new() -> Self {
        Self {
            number: 0,
            title: String::new(),
            composer: String::new(),
            meter: Meter::default(),
            unit_note_length: Rational::from_integer(0),
            rhythm: String::new(),
            key: Key::default(),
            origin: String::new(),
            tempo: 0,
            note_values: Vec::new(),
            note_lengths: Vec::new(),
        }
    }

    /// Append one musical event, keeping the two vectors in lockstep.
    pub fn push_event(&mut self, value: i32, length: Rational) {
        self.note_values.push(value);
        self.note_lengths.push(length);
    }
}

impl Default for Song {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "number: {}", self.number)?;
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "composer: {}", self.composer)?;
        writeln!(f, "meter: {}", self.meter)?;
        writeln!(f, "unit note length: {}", self.unit_note_length)?;
        writeln!(f, "rhythm: {}", self.rhythm)?;
        writeln!(f, "key: {}", self.key)?;
        writeln!(f, "origin: {}", self.origin)?;
        writeln!(f, "tempo: {}", self.tempo)?;
        writeln!(f, "note values: {:?}", self.note_values)?;
        let lengths: Vec<String> = self.note_lengths.iter().map(Rational::to_string).collect();
        writeln!(f, "note lengths: [{}]", lengths.join(", "))
    }
}
