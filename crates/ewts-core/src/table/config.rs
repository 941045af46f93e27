use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

#[derive(Deserialize)]
struct TableToml {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    marks: BTreeMap<String, String>,
    convention: ConventionToml,
}

#[derive(Deserialize)]
struct ConventionToml {
    subjoin_marker: String,
    prefix_consonants: Vec<String>,
    #[serde(default)]
    bare_vowel_base: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptySection(&'static str),
    #[error("empty pattern in [{0}]")]
    EmptyPattern(&'static str),
    #[error("non-ASCII pattern: {0:?}")]
    NonAsciiPattern(String),
    #[error("pattern contains whitespace: {0:?}")]
    WhitespacePattern(String),
    #[error("pattern starts with a digit: {0:?}")]
    DigitPattern(String),
    #[error("empty replacement for pattern: {0:?}")]
    EmptyReplacement(String),
    #[error("pattern defined in more than one class: {0:?}")]
    ConflictingPattern(String),
    #[error("prefix consonant not defined in [consonants]: {0:?}")]
    UnknownPrefixConsonant(String),
    #[error("subjoin marker must be a single ASCII character: {0:?}")]
    BadSubjoinMarker(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

/// Orthographic convention data carried alongside the pattern tables.
#[derive(Debug, Clone)]
pub struct Convention {
    /// ACIP marker for explicit stacking.
    pub subjoin_marker: char,
    /// Consonants that attach as superscripts to a following base.
    pub prefix_consonants: Vec<String>,
    /// EWTS carrier emitted before the vowel of a vowel-only syllable.
    pub bare_vowel_base: String,
}

impl Convention {
    pub(crate) fn is_prefix(&self, raw: &str) -> bool {
        self.prefix_consonants.iter().any(|p| p == raw)
    }
}

/// A validated mapping table, ready to back a `Transducer`.
#[derive(Debug, Clone)]
pub struct MappingTable {
    pub consonants: BTreeMap<String, String>,
    pub vowels: BTreeMap<String, String>,
    pub marks: BTreeMap<String, String>,
    pub convention: Convention,
}

/// Parse TOML text into a validated `MappingTable`.
///
/// Malformed configuration is fatal here, before any conversion runs;
/// malformed *input* is never fatal (see the transducer module).
pub fn parse_table_toml(toml_str: &str) -> Result<MappingTable, TableError> {
    let raw: TableToml = toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if raw.consonants.is_empty() {
        return Err(TableError::EmptySection("consonants"));
    }
    if raw.vowels.is_empty() {
        return Err(TableError::EmptySection("vowels"));
    }

    let sections: [(&'static str, &BTreeMap<String, String>); 3] = [
        ("consonants", &raw.consonants),
        ("vowels", &raw.vowels),
        ("marks", &raw.marks),
    ];
    let mut seen: HashSet<&str> = HashSet::new();
    for (name, section) in sections {
        for (pattern, replacement) in section {
            if pattern.is_empty() {
                return Err(TableError::EmptyPattern(name));
            }
            if !pattern.is_ascii() {
                return Err(TableError::NonAsciiPattern(pattern.clone()));
            }
            if pattern.bytes().any(|b| b.is_ascii_whitespace()) {
                return Err(TableError::WhitespacePattern(pattern.clone()));
            }
            // Digits are tokenized before the table is consulted, so a
            // digit-initial pattern could never match.
            if pattern.as_bytes()[0].is_ascii_digit() {
                return Err(TableError::DigitPattern(pattern.clone()));
            }
            if replacement.is_empty() {
                return Err(TableError::EmptyReplacement(pattern.clone()));
            }
            if !seen.insert(pattern.as_str()) {
                return Err(TableError::ConflictingPattern(pattern.clone()));
            }
        }
    }

    let marker = &raw.convention.subjoin_marker;
    if marker.len() != 1 || !marker.is_ascii() {
        return Err(TableError::BadSubjoinMarker(marker.clone()));
    }
    if seen.contains(marker.as_str()) {
        return Err(TableError::ConflictingPattern(marker.clone()));
    }
    for prefix in &raw.convention.prefix_consonants {
        if !raw.consonants.contains_key(prefix) {
            return Err(TableError::UnknownPrefixConsonant(prefix.clone()));
        }
    }

    let subjoin_marker = match marker.chars().next() {
        Some(c) => c,
        None => return Err(TableError::BadSubjoinMarker(marker.clone())),
    };

    Ok(MappingTable {
        consonants: raw.consonants,
        vowels: raw.vowels,
        marks: raw.marks,
        convention: Convention {
            subjoin_marker,
            prefix_consonants: raw.convention.prefix_consonants,
            bare_vowel_base: raw.convention.bare_vowel_base,
        },
    })
}
