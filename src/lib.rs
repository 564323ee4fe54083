//! Parser for the ABC music notation format.
//!
//! Reads a tune's header block (`X:`, `T:`, `M:`, `L:`, `K:` and friends)
//! and music-data lines into a [`Song`]: the header metadata plus parallel
//! vectors of pitch-table indices and exact rational duration multipliers.
//! See [`parse`] for the entry point and [`error::AbcError`] for the ways a
//! tune can be rejected.

pub mod error;
pub mod key;
pub mod lexer;
pub mod note;
pub mod parser;
pub mod pitch;
pub mod song;

pub use error::*;
pub use key::Key;
pub use note::NoteToken;
pub use parser::parse;
pub use pitch::REST;
pub use song::{Meter, Rational, Song};

use std::fs;
use std::path::Path;

/// Parse an ABC file from disk.
/// This is the main entry point for callers working with tune files.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Song, AbcError> {
    let source = fs::read_to_string(&path).map_err(|source| AbcError::MissingInput {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    parse(&source)
}
