//! # Parser
//!
//! Turns ABC source text into a [`Song`].
//!
//! A tune is a header block followed by music-data lines. The parser walks
//! the lines in two states: headers until the `K:` key field (by format
//! convention the last header), then music for the rest of the file. Music
//! lines run through [`lexer::scan_line`] and every raw token is resolved
//! against the key's accidental set into a pitch-table index and an exact
//! duration multiplier, appended in temporal order.
//!
//! ## Example
//! ```rust
//! use abc::parse;
//!
//! let source = r#"X:1
//! T:Scale
//! M:C
//! L:1/8
//! K:C
//! CDEF
//! "#;
//!
//! let song = parse(source).unwrap();
//! assert_eq!(song.title, "Scale");
//! assert_eq!(song.note_values.len(), 4);
//! ```

use crate::error::AbcError;
use crate::key::Key;
use crate::lexer;
use crate::note::NoteToken;
use crate::pitch;
use crate::song::{Meter, Rational, Song};

/// Parses a complete ABC source text into a [`Song`].
pub fn parse(source: &str) -> Result<Song, AbcError> {
    let mut song = Song::new();
    let mut in_music = false;

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if in_music {
            process_music_line(&mut song, line, line_no)?;
        } else {
            in_music = read_header_line(&mut song, line, line_no)?;
        }
    }

    Ok(song)
}

/// Applies one header line to the song. Returns true when the line was the
/// `K:` key field, which closes the header block.
fn read_header_line(song: &mut Song, line: &str, line_no: usize) -> Result<bool, AbcError> {
    if line.starts_with('%') || line.starts_with("W:") {
        // comments and lyric lines carry nothing the song keeps
        return Ok(false);
    }

    if let Some(value) = line.strip_prefix("X:") {
        song.number = value.trim().parse().unwrap_or(0);
    } else if let Some(value) = line.strip_prefix("T:") {
        song.title = value.trim().to_string();
    } else if let Some(value) = line.strip_prefix("C:") {
        song.composer = value.trim().to_string();
    } else if let Some(value) = line.strip_prefix("M:") {
        let text = value.trim();
        song.meter = Meter::from_str(text).ok_or_else(|| AbcError::MalformedMeter {
            line: line_no,
            text: text.to_string(),
        })?;
    } else if let Some(value) = line.strip_prefix("L:") {
        song.unit_note_length = parse_unit_note_length(value.trim())?;
    } else if let Some(value) = line.strip_prefix("R:") {
        song.rhythm = value.trim().to_string();
    } else if let Some(value) = line.strip_prefix("K:") {
        let text = value.trim();
        song.key = Key::from_str(text).ok_or_else(|| AbcError::UnrecognizedKey {
            text: text.to_string(),
        })?;
        return Ok(true);
    } else if let Some(value) = line.strip_prefix("O:") {
        song.origin = value.trim().to_string();
    } else if let Some(value) = line.strip_prefix("Q:") {
        song.tempo = value.trim().parse().unwrap_or(0);
    } else {
        return Err(AbcError::UnrecognizedHeader {
            line: line_no,
            text: line.to_string(),
        });
    }

    Ok(false)
}

/// The `L:` unit note length, a `numerator/denominator` fraction. Only the
/// first two `/`-separated fields are read.
fn parse_unit_note_length(text: &str) -> Result<Rational, AbcError> {
    let mut fields = text.split('/');
    let numer = fields.next().and_then(|f| f.trim().parse::<i32>().ok());
    let denom = fields.next().and_then(|f| f.trim().parse::<i32>().ok());
    match (numer, denom) {
        (Some(n), Some(d)) if d != 0 => Ok(Rational::new(n, d)),
        _ => Err(AbcError::MalformedDurationFraction {
            text: text.to_string(),
        }),
    }
}

fn process_music_line(song: &mut Song, line: &str, line_no: usize) -> Result<(), AbcError> {
    for raw in lexer::scan_line(line, line_no)? {
        resolve_token(song, &raw)?;
    }
    Ok(())
}

/// Resolves one raw token into a pitch/duration event on the song.
fn resolve_token(song: &mut Song, raw: &str) -> Result<(), AbcError> {
    if raw.trim().is_empty() {
        return Ok(());
    }

    let token = NoteToken::decompose(raw)?;

    if token.is_rest() {
        song.push_event(pitch::REST, token.length);
        return Ok(());
    }

    let mut name = match token.letter {
        Some(letter) => {
            let substituted = song.key.accidentals().iter().find(|entry| {
                entry
                    .chars()
                    .next()
                    .map_or(false, |first| first.eq_ignore_ascii_case(&letter))
            });
            match substituted {
                // the key signature's spelling replaces the bare letter
                Some(entry) => (*entry).to_string(),
                None => letter.to_string(),
            }
        }
        None => String::new(),
    };

    if !token.accidentals.is_empty() {
        return Err(AbcError::UnsupportedFeature {
            token: raw.to_string(),
        });
    }

    name.push_str(&token.registers);

    match pitch::index_of(&name) {
        Some(index) => {
            song.push_event(index as i32, token.length);
            Ok(())
        }
        None => Err(AbcError::UnknownPitch {
            token: raw.to_string(),
            name,
        }),
    }
}
