//! Integration tests for the ABC parser
//!
//! Tests the full pipeline from ABC source text to the parsed Song.

use std::io::Write;

use abc::{parse, parse_file, AbcError, Key, Meter, Rational};

#[test]
fn test_parse_a_whole_tune() {
    let source = r#"X:1
T:The Test Reel
C:Trad.
M:4/4
L:1/8
R:reel
O:Ireland
Q:180
K:Em
"Em"E2 B,2 e2 | d2 c2 B2 | G4 z2 | "D"d2 f2 a2 |
g2 e2 d2 B2 \
%repeat the strain
E4 z4 |
"#;
    let song = parse(source).unwrap();

    assert_eq!(song.number, 1);
    assert_eq!(song.title, "The Test Reel");
    assert_eq!(song.composer, "Trad.");
    assert_eq!(song.meter, Meter { beats: 4, unit: 4 });
    assert_eq!(song.unit_note_length, Rational::new(1, 8));
    assert_eq!(song.rhythm, "reel");
    assert_eq!(song.origin, "Ireland");
    assert_eq!(song.tempo, 180);
    // Em is the relative minor spelling of G
    assert_eq!(song.key, Key::G);

    // chord annotations and the comment line contribute no events; the
    // lowercase f picks up the key's F# spelling
    assert_eq!(
        song.note_values,
        vec![28, 23, 40, 38, 36, 35, 31, -1, 38, 30, 45, 43, 40, 38, 35, 28, -1]
    );
    let lengths: Vec<i32> = song
        .note_lengths
        .iter()
        .map(|l| l.to_integer())
        .collect();
    assert_eq!(lengths, vec![2, 2, 2, 2, 2, 2, 4, 2, 2, 2, 2, 2, 2, 2, 2, 4, 4]);
}

#[test]
fn test_scale_has_increasing_pitch_indices() {
    let source = "X:1\nT:Test\nM:C\nL:1/8\nK:C\nCDEF\n";
    let song = parse(source).unwrap();

    assert_eq!(song.meter, Meter { beats: 4, unit: 4 });
    assert_eq!(song.unit_note_length, Rational::new(1, 8));
    assert_eq!(song.note_values, vec![24, 26, 28, 29]);
    assert!(song.note_values.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(song
        .note_lengths
        .iter()
        .all(|l| *l == Rational::from_integer(1)));
}

#[test]
fn test_key_signature_sharpens_bare_letters() {
    let song = parse("K:D\nF\n").unwrap();
    assert_eq!(song.note_values, vec![30]); // F#, not F
}

#[test]
fn test_rest_with_multiplier() {
    let song = parse("K:C\nz2\n").unwrap();
    assert_eq!(song.note_values, vec![-1]);
    assert_eq!(song.note_lengths, vec![Rational::from_integer(2)]);
}

#[test]
fn test_halved_note() {
    let song = parse("K:C\nG/2\n").unwrap();
    assert_eq!(song.note_values, vec![31]);
    assert_eq!(song.note_lengths, vec![Rational::new(1, 2)]);
}

#[test]
fn test_stray_header_is_rejected_with_its_line() {
    let source = "X:1\nT:Test\nZ:foo\nK:C\n";
    match parse(source) {
        Err(AbcError::UnrecognizedHeader { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "Z:foo");
        }
        other => panic!("Expected UnrecognizedHeader, got {:?}", other),
    }
}

#[test]
fn test_comment_and_whitespace_lines_make_no_events() {
    let song = parse("K:C\n% nothing here\n   \n\n").unwrap();
    assert!(song.note_values.is_empty());
    assert!(song.note_lengths.is_empty());
}

#[test]
fn test_relative_spellings_parse_identically() {
    // one tonality, four spellings: the parsed songs match exactly
    let tune = "F2 A2 | d4 |\n";
    let baseline = parse(&format!("K:G\n{}", tune)).unwrap();
    for key_text in ["Em", "Dmix", "Ador", "Bphr", "g"] {
        let song = parse(&format!("K:{}\n{}", key_text, tune)).unwrap();
        assert_eq!(song, baseline, "key spelling {key_text}");
    }
}

#[test]
fn test_substitution_collapses_case() {
    // the accidental table spells F# uppercase, so f lands an octave low
    let upper = parse("K:D\nF\n").unwrap();
    let lower = parse("K:D\nf\n").unwrap();
    assert_eq!(upper.note_values, lower.note_values);
}

#[test]
fn test_bad_header_values_are_rejected() {
    match parse("K:Z\n") {
        Err(AbcError::UnrecognizedKey { text }) => assert_eq!(text, "Z"),
        other => panic!("Expected UnrecognizedKey, got {:?}", other),
    }
    assert!(matches!(
        parse("M:waltz\nK:C\n"),
        Err(AbcError::MalformedMeter { line: 1, .. })
    ));
    assert!(matches!(
        parse("L:1/x\nK:C\n"),
        Err(AbcError::MalformedDurationFraction { .. })
    ));
}

#[test]
fn test_bad_notes_are_rejected() {
    assert!(matches!(
        parse("K:C\nC3/0\n"),
        Err(AbcError::MalformedDurationFraction { .. })
    ));
    // Eb major flattens E to a spelling the pitch table lacks
    match parse("K:Eb\nE\n") {
        Err(AbcError::UnknownPitch { token, name }) => {
            assert_eq!(token, "E");
            assert_eq!(name, "Eb");
        }
        other => panic!("Expected UnknownPitch, got {:?}", other),
    }
}

#[test]
fn test_unterminated_chord_annotation() {
    match parse("K:C\n\"Am C D\n") {
        Err(AbcError::UnterminatedChord { line }) => assert_eq!(line, 2),
        other => panic!("Expected UnterminatedChord, got {:?}", other),
    }
}

#[test]
fn test_unknown_character_in_music() {
    match parse("K:C\nC$D\n") {
        Err(AbcError::UnrecognizedCharacter { line, found }) => {
            assert_eq!(line, 2);
            assert_eq!(found, '$');
        }
        other => panic!("Expected UnrecognizedCharacter, got {:?}", other),
    }
}

#[test]
fn test_explicit_accidental_aborts_the_parse() {
    let result = parse("K:C\nC D ^F G\n");
    assert!(matches!(
        result,
        Err(AbcError::UnsupportedFeature { .. })
    ));
}

#[test]
fn test_vectors_stay_parallel_across_a_long_body() {
    let source = "K:C\nCDEF GABc | z2 c2 d/2e/2 | C,,4 b''4 |\n";
    let song = parse(source).unwrap();
    assert_eq!(song.note_values.len(), song.note_lengths.len());
    assert_eq!(song.note_values.first(), Some(&24));
    assert_eq!(song.note_values.last(), Some(&71));
}

#[test]
fn test_parse_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "X:9\nT:From Disk\nK:D\nD2 F2 A2 |\n").unwrap();

    let song = parse_file(file.path()).unwrap();
    assert_eq!(song.number, 9);
    assert_eq!(song.title, "From Disk");
    assert_eq!(song.note_values, vec![26, 30, 33]);
}

#[test]
fn test_parse_file_missing_path() {
    let result = parse_file("/no/such/tune.abc");
    match result {
        Err(AbcError::MissingInput { path, .. }) => {
            assert_eq!(path, "/no/such/tune.abc");
        }
        other => panic!("Expected MissingInput, got {:?}", other),
    }
}

#[test]
fn test_text_dump_lists_fields() {
    let song = parse("X:1\nT:Dump Me\nK:C\nC2\n").unwrap();
    let dump = song.to_string();
    assert!(dump.contains("title: Dump Me"));
    assert!(dump.contains("key: C"));
    assert!(dump.contains("note values: [24]"));
    assert!(dump.contains("note lengths: [2]"));
}

#[test]
fn test_yaml_dump_serializes() {
    let song = parse("X:1\nT:Yaml Me\nK:C\nC2\n").unwrap();
    let yaml = serde_yaml::to_string(&song).unwrap();
    assert!(yaml.contains("title: Yaml Me"));
    assert!(yaml.contains("note_values:"));
}
