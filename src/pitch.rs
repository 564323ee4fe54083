//! The chromatic pitch table.
//!
//! A note's numeric value is the position of its canonical name in [`NOTES`]:
//! six octaves by semitone, sharps only, uppercase letters (with optional
//! `,,`/`,` suffixes) below middle C and lowercase (with optional `'`/`''`
//! suffixes) from middle C up. `index_of("c")` is middle C. Rests carry the
//! [`REST`] sentinel instead of a table position.

/// Pitch value recorded for a rest event.
pub const REST: i32 = -1;

/// Canonical pitch names, chromatic by semitone. A pitch's numeric value is
/// its index here.
pub const NOTES: [&str; 72] = [
    // three octaves below middle C
    "C,,", "C#,,", "D,,", "D#,,", "E,,", "F,,", "F#,,", "G,,", "G#,,", "A,,", "A#,,", "B,,",
    // two octaves below middle C
    "C,", "C#,", "D,", "D#,", "E,", "F,", "F#,", "G,", "G#,", "A,", "A#,", "B,",
    // one octave below middle C
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    // middle C
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
    // one octave above middle C
    "c'", "c#'", "d'", "d#'", "e'", "f'", "f#'", "g'", "g#'", "a'", "a#'", "b'",
    // two octaves above middle C
    "c''", "c#''", "d''", "d#''", "e''", "f''", "f#''", "g''", "g#''", "a''", "a#''", "b''",
];

/// Frequencies in Hz, parallel to [`NOTES`].
pub const FREQUENCIES: [f64; 72] = [
    32.70, 34.65, 36.71, 38.89, 41.20, 43.65, 46.25, 49.00, 51.91, 55.00, 58.27, 61.74,
    65.41, 69.30, 73.42, 77.78, 82.41, 87.31, 92.50, 98.00, 103.83, 110.00, 116.54, 123.47,
    130.81, 138.59, 146.83, 155.56, 164.81, 174.61, 185.00, 196.00, 207.65, 220.00, 233.08,
    246.94,
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16,
    493.88,
    523.25, 554.37, 587.33, 622.25, 659.25, 698.46, 739.99, 783.99, 830.61, 880.00, 932.33,
    987.77,
    1046.50, 1108.73, 1174.66, 1244.51, 1318.51, 1396.91, 1479.98, 1567.98, 1661.22, 1760.00,
    1864.66, 1975.53,
];

/// Looks up a canonical pitch name, returning its table position.
pub fn index_of(name: &str) -> Option<usize> {
    NOTES.iter().position(|&entry| entry == name)
}

/// Frequency in Hz for a pitch value. Rests and out-of-range values have
/// no frequency.
pub fn frequency(value: i32) -> Option<f64> {
    usize::try_from(value)
        .ok()
        .and_then(|index| FREQUENCIES.get(index).copied())
}
