//! Note-token decomposition.
//!
//! A raw token like `G,2` or `2z` is pulled apart into its base letter,
//! explicit accidental markers, register markers, and an exact duration
//! multiplier before the note resolver turns it into a pitch index.

use crate::error::AbcError;
use crate::lexer;
use crate::song::Rational;

/// One raw token split into its note components.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteToken {
    /// The note letter or rest marker, case preserved. `None` when the
    /// token never named one (a stray modifier run such as `2` or `,`).
    pub letter: Option<char>,
    /// Explicit accidental markers, as written.
    pub accidentals: String,
    /// Register markers, as written; appended verbatim to the resolved
    /// pitch name.
    pub registers: String,
    /// Duration multiplier relative to the unit note length.
    pub length: Rational,
}

impl NoteToken {
    /// Splits a raw token in a single pass. The first letter (or rest
    /// marker) becomes the base letter. A duration digit before the letter
    /// is a whole-number multiplier, each one overwriting the last; duration
    /// characters after the letter collect into a fraction, which applies
    /// only while the multiplier is still exactly 1.
    pub fn decompose(raw: &str) -> Result<Self, AbcError> {
        let mut letter = None;
        let mut accidentals = String::new();
        let mut registers = String::new();
        let mut length = Rational::from_integer(1);
        let mut suffix = String::new();

        for c in raw.chars() {
            if lexer::is_pitch_letter(c) || lexer::is_rest_marker(c) {
                if letter.is_none() {
                    letter = Some(c);
                }
            } else if lexer::is_accidental_marker(c) {
                accidentals.push(c);
            } else if lexer::is_register_marker(c) {
                registers.push(c);
            } else if lexer::is_duration_modifier(c) {
                if letter.is_some() {
                    suffix.push(c);
                } else {
                    match c.to_digit(10) {
                        Some(digit) => length = Rational::from_integer(digit as i32),
                        // a '/' before the letter has no whole-number reading
                        None => {
                            return Err(AbcError::MalformedDurationFraction {
                                text: raw.to_string(),
                            });
                        }
                    }
                }
            }
            // the line scanner admits no other characters
        }

        if length == Rational::from_integer(1) && !suffix.is_empty() {
            length = parse_duration_fraction(&suffix).ok_or_else(|| {
                AbcError::MalformedDurationFraction {
                    text: raw.to_string(),
                }
            })?;
        }

        Ok(Self {
            letter,
            accidentals,
            registers,
            length,
        })
    }

    /// True when the base letter is a rest marker.
    pub fn is_rest(&self) -> bool {
        self.letter.map_or(false, lexer::is_rest_marker)
    }
}

/// The suffix fraction grammar, split on `/`:
/// one segment is a whole multiplier (`3`); two segments divide, with an
/// absent numerator read as 1 and an absent denominator read as 2 (`3/2`,
/// `/4`, `3/`, and the bare halving `/`); three segments divide the outer
/// pair (`3//2`). Anything else, including a zero denominator, is malformed.
fn parse_duration_fraction(s: &str) -> Option<Rational> {
    let segments: Vec<&str> = s.split('/').collect();
    match segments.as_slice() {
        [whole] => {
            let n: i32 = whole.parse().ok()?;
            Some(Rational::from_integer(n))
        }
        [numer, denom] => {
            let n: i32 = if numer.is_empty() {
                1
            } else {
                numer.parse().ok()?
            };
            let d: i32 = if denom.is_empty() {
                2
            } else {
                denom.parse().ok()?
            };
            if d == 0 {
                return None;
            }
            Some(Rational::new(n, d))
        }
        [numer, _, denom] => {
            let n: i32 = numer.parse().ok()?;
            let d: i32 = denom.parse().ok()?;
            if d == 0 {
                return None;
            }
            Some(Rational::new(n, d))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_of(raw: &str) -> Rational {
        NoteToken::decompose(raw).unwrap().length
    }

    #[test]
    fn test_plain_letter() {
        let token = NoteToken::decompose("C").unwrap();
        assert_eq!(token.letter, Some('C'));
        assert!(token.accidentals.is_empty());
        assert!(token.registers.is_empty());
        assert_eq!(token.length, Rational::from_integer(1));
    }

    #[test]
    fn test_no_duration_always_means_one() {
        for raw in ["C", "d'", "_B,", "z", "^f''"] {
            assert_eq!(length_of(raw), Rational::from_integer(1), "token {raw}");
        }
    }

    #[test]
    fn test_prefix_multiplier() {
        assert_eq!(length_of("2z"), Rational::from_integer(2));
        assert_eq!(length_of("2C"), Rational::from_integer(2));
        // each prefix digit overwrites the previous one
        assert_eq!(length_of("12C"), Rational::from_integer(2));
    }

    #[test]
    fn test_prefix_one_still_defers_to_the_suffix() {
        assert_eq!(length_of("1C3"), Rational::from_integer(3));
        assert_eq!(length_of("2C3"), Rational::from_integer(2));
    }

    #[test]
    fn test_suffix_fractions() {
        assert_eq!(length_of("C3"), Rational::from_integer(3));
        assert_eq!(length_of("C12"), Rational::from_integer(12));
        assert_eq!(length_of("C/4"), Rational::new(1, 4));
        assert_eq!(length_of("C/"), Rational::new(1, 2));
        assert_eq!(length_of("C3/2"), Rational::new(3, 2));
        assert_eq!(length_of("C3/"), Rational::new(3, 2));
        assert_eq!(length_of("C3//2"), Rational::new(3, 2));
        // the middle segment is ignored, only the outer pair divides
        assert_eq!(length_of("C1/2/3"), Rational::new(1, 3));
    }

    #[test]
    fn test_malformed_fractions() {
        for raw in ["C//", "C//2", "C1/2/3/4", "C3/0", "/C"] {
            let result = NoteToken::decompose(raw);
            assert!(
                matches!(result, Err(AbcError::MalformedDurationFraction { .. })),
                "token {raw} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_registers_are_preserved_verbatim() {
        assert_eq!(NoteToken::decompose("C,,").unwrap().registers, ",,");
        assert_eq!(NoteToken::decompose("c''").unwrap().registers, "''");
        assert_eq!(NoteToken::decompose("c,'").unwrap().registers, ",'");
    }

    #[test]
    fn test_accidental_markers_are_collected() {
        assert_eq!(NoteToken::decompose("^C").unwrap().accidentals, "^");
        assert_eq!(NoteToken::decompose("^^c").unwrap().accidentals, "^^");
        assert_eq!(NoteToken::decompose("=_d").unwrap().accidentals, "=_");
    }

    #[test]
    fn test_first_letter_wins() {
        let token = NoteToken::decompose("Cz").unwrap();
        assert_eq!(token.letter, Some('C'));
        assert!(!token.is_rest());
    }

    #[test]
    fn test_rest_detection() {
        assert!(NoteToken::decompose("z2").unwrap().is_rest());
        assert!(NoteToken::decompose("Z").unwrap().is_rest());
        assert!(!NoteToken::decompose("C").unwrap().is_rest());
        assert!(!NoteToken::decompose("2").unwrap().is_rest());
    }
}
