//! # Error Types
//!
//! This module defines all error types for the ABC parser.
//!
//! Every failure aborts the parse of the whole tune; no partial
//! [`Song`](crate::Song) is ever returned. Errors carry enough context to
//! locate the fault: header and tokenizer errors carry the 1-based line
//! number, note resolution errors carry the offending token or pitch-name
//! text.
//!
//! The only tolerated bad input is a non-numeric `X:` or `Q:` header value,
//! which parses to 0 instead of failing.
//!
//! ## Usage
//! ```rust
//! use abc::{parse, AbcError};
//!
//! match parse("Z:not a real header\n") {
//!     Ok(song) => println!("{song}"),
//!     Err(AbcError::UnrecognizedHeader { line, text }) => {
//!         eprintln!("bad header on line {}: {}", line, text);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbcError {
    /// The input file could not be read at all.
    #[error("Unable to read input file '{path}': {source}")]
    MissingInput {
        path: String,
        source: std::io::Error,
    },

    /// A line in the header block matched no known header prefix.
    ///
    /// # Example
    /// ```
    /// # use abc::AbcError;
    /// let err = AbcError::UnrecognizedHeader {
    ///     line: 3,
    ///     text: "Z:oops".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unable to read header at line 3: Z:oops");
    /// ```
    #[error("Unable to read header at line {line}: {text}")]
    UnrecognizedHeader { line: usize, text: String },

    /// A `K:` header value matched no alias in the key table.
    #[error("Unable to parse key from: {text}")]
    UnrecognizedKey { text: String },

    /// An `M:` header value was neither `C`, `C|`, nor `beats/unit`.
    #[error("Malformed meter at line {line}: {text}")]
    MalformedMeter { line: usize, text: String },

    /// A chord annotation opened with `"` but the closing quote never
    /// arrived before the end of the line.
    #[error("Unterminated chord annotation at line {line}")]
    UnterminatedChord { line: usize },

    /// A music-data line contained a character outside the note grammar.
    #[error("Unknown character '{found}' at line {line}")]
    UnrecognizedCharacter { line: usize, found: char },

    /// A token spelled an accidental explicitly (`^`, `_`, `=`); only
    /// key-signature accidentals are supported.
    #[error("Explicit accidentals are not supported: {token}")]
    UnsupportedFeature { token: String },

    /// A token resolved to a pitch name with no entry in the pitch table.
    ///
    /// # Example
    /// ```
    /// # use abc::AbcError;
    /// let err = AbcError::UnknownPitch {
    ///     token: "B".to_string(),
    ///     name: "Bb".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Unable to determine note value for 'Bb' in token 'B'"
    /// );
    /// ```
    #[error("Unable to determine note value for '{name}' in token '{token}'")]
    UnknownPitch { token: String, name: String },

    /// A duration modifier could not be read as a whole number or as a
    /// numerator/denominator fraction.
    #[error("Malformed duration fraction: {text}")]
    MalformedDurationFraction { text: String },
}
