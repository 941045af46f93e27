use super::transducer;
use crate::transducer::WarningKind;

#[test]
fn test_convert_empty() {
    let result = transducer().convert("");
    assert_eq!(result.ewts, "");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_simple_syllable() {
    let result = transducer().convert("KA");
    assert_eq!(result.ewts, "ka");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_superscript_attaches() {
    // S is in the prefix set, so SKA resolves without a warning.
    let result = transducer().convert("SKA");
    assert_eq!(result.ewts, "ska");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_superscript_chain_promotes() {
    let result = transducer().convert("RSKA");
    assert_eq!(result.ewts, "rska");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_subjoin_marker_subscript() {
    let result = transducer().convert("G+HA");
    assert_eq!(result.ewts, "g+ha");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_multiple_subscripts() {
    let result = transducer().convert("G+R+YA");
    assert_eq!(result.ewts, "g+r+ya");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_fallback_cluster_warns() {
    // G is not a superscript letter: G and S become independent stacks.
    let result = transducer().convert("GSUM");
    assert_eq!(result.ewts, "gsum");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::UnstackedCluster);
    assert_eq!(result.warnings[0].offset, 1);
    assert_eq!(result.warnings[0].text, "S");
}

#[test]
fn test_fallback_never_leaks_inherent_vowel() {
    let result = transducer().convert("SANGS");
    assert_eq!(result.ewts, "sangs");
}

#[test]
fn test_bare_vowel_default_base() {
    // Vowel-only syllables are valid input, no warning.
    let result = transducer().convert("A");
    assert_eq!(result.ewts, "a");
    assert!(result.warnings.is_empty());

    let result = transducer().convert("I");
    assert_eq!(result.ewts, "i");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_vowel_after_closed_stack_rides_default_base() {
    let result = transducer().convert("KAI");
    assert_eq!(result.ewts, "kai");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_dangling_marker_at_end() {
    let result = transducer().convert("K+");
    assert_eq!(result.ewts, "k");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::DanglingSubjoinMarker);
    assert_eq!(result.warnings[0].offset, 1);
}

#[test]
fn test_dangling_marker_without_stack() {
    let result = transducer().convert("+KA");
    assert_eq!(result.ewts, "+ka");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::DanglingSubjoinMarker);
    assert_eq!(result.warnings[0].offset, 0);
}

#[test]
fn test_dangling_marker_before_vowel() {
    let result = transducer().convert("K+A");
    assert_eq!(result.ewts, "ka");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::DanglingSubjoinMarker);
}

#[test]
fn test_doubled_marker_warns_once_per_orphan() {
    let result = transducer().convert("K++YA");
    assert_eq!(result.ewts, "k+ya");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::DanglingSubjoinMarker);
    assert_eq!(result.warnings[0].offset, 1);
}

#[test]
fn test_punctuation_closes_stack() {
    let result = transducer().convert("KA,KHA");
    assert_eq!(result.ewts, "ka/kha");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_visarga_after_vowel() {
    let result = transducer().convert("KA:");
    assert_eq!(result.ewts, "kaH");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_whitespace_separates_syllables() {
    let result = transducer().convert("KA KHA");
    assert_eq!(result.ewts, "ka kha");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_digits_and_whitespace_pass_through() {
    let result = transducer().convert("108 \n 23");
    assert_eq!(result.ewts, "108 \n 23");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_unrecognized_passes_through_verbatim() {
    let result = transducer().convert("K(A");
    assert_eq!(result.ewts, "k(a");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].kind, WarningKind::UnrecognizedInput);
    assert_eq!(result.warnings[0].offset, 1);
    assert_eq!(result.warnings[0].text, "(");
}

#[test]
fn test_retroflex_case() {
    let result = transducer().convert("tA THA");
    assert_eq!(result.ewts, "Ta tha");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_reversed_gigu() {
    let result = transducer().convert("K-I");
    assert_eq!(result.ewts, "k-i");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_custom_table_variant() {
    // Dialect tables are plain data: a variant that spells the aspirated
    // affricate differently coexists with the default.
    let toml = r#"
[consonants]
K = "k"
TS = "c'"

[vowels]
A = "a"

[convention]
subjoin_marker = "+"
prefix_consonants = []
"#;
    let custom = crate::transducer::Transducer::from_toml(toml).unwrap();
    assert_eq!(custom.convert("TSA").ewts, "c'a");
    assert_eq!(transducer().convert("TSA").ewts, "tsha");
}

#[test]
fn test_determinism() {
    let input = "SANGS RGYAS KYI BKA' 'GYUR, 108";
    let first = transducer().convert(input);
    let second = transducer().convert(input);
    assert_eq!(first, second);
}
