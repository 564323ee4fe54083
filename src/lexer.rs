use crate::error::AbcError;

/// True for the note letters a through g, either case.
pub fn is_pitch_letter(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a'..='g')
}

/// True for the rest markers z and Z.
pub fn is_rest_marker(c: char) -> bool {
    c == 'z' || c == 'Z'
}

/// True for characters that modify a note's duration: digits and `/`.
pub fn is_duration_modifier(c: char) -> bool {
    c.is_ascii_digit() || c == '/'
}

/// True for explicit accidental markers: `^` sharp, `_` flat, `=` natural.
pub fn is_accidental_marker(c: char) -> bool {
    matches!(c, '^' | '_' | '=')
}

/// True for the register (octave) markers `'` and `,`.
pub fn is_register_marker(c: char) -> bool {
    c == '\'' || c == ','
}

/// Splits one music-data line into raw note tokens.
///
/// A token accumulates from a note letter (or bare modifiers) until the next
/// note letter, whitespace, or barline. `%` comments and `\` continuations
/// end the musical content of the line; `"chord"` annotations contribute
/// nothing. The token pending when the line ends is still emitted, so a
/// line may end in a note.
pub fn scan_line(line: &str, line_no: usize) -> Result<Vec<String>, AbcError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() || c == '|' {
            flush(&mut tokens, &mut current);
        } else if c == '%' || c == '\\' {
            // comment or continuation: nothing musical follows
            break;
        } else if is_pitch_letter(c) {
            // a new letter closes the previous token
            flush(&mut tokens, &mut current);
            current.push(c);
        } else if is_rest_marker(c)
            || is_duration_modifier(c)
            || is_accidental_marker(c)
            || is_register_marker(c)
        {
            current.push(c);
        } else if c == '"' {
            match chars[i + 1..].iter().position(|&ch| ch == '"') {
                Some(offset) => {
                    i += offset + 2;
                    continue;
                }
                None => return Err(AbcError::UnterminatedChord { line: line_no }),
            }
        } else {
            return Err(AbcError::UnrecognizedCharacter {
                line: line_no,
                found: c,
            });
        }
        i += 1;
    }

    flush(&mut tokens, &mut current);
    Ok(tokens)
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
