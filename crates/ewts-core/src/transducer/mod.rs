//! ACIP → EWTS conversion pipeline.
//!
//! Three stages behind one entry point: tokenize (greedy longest-match
//! against the mapping table), resolve (group tokens into syllable
//! stacks), render (emit EWTS). Malformed input degrades to pass-through
//! plus warnings; only a malformed table is ever a hard error.

mod render;
mod stack;
mod tokenizer;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::table::{parse_table_toml, Convention, MappingTable, TableError, DEFAULT_TOML};
use crate::trie::MappingTrie;

pub use tokenizer::{Token, TokenClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Input span not covered by the mapping table; passed through verbatim.
    UnrecognizedInput,
    /// Consonant-on-consonant outside the prefix/subjoin sets; each became
    /// its own stack.
    UnstackedCluster,
    /// Subjoin marker with no consonant to attach.
    DanglingSubjoinMarker,
}

/// A non-fatal conversion diagnostic: what happened, where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Byte offset into the converted input.
    pub offset: usize,
    pub kind: WarningKind,
    /// The offending input text.
    pub text: String,
}

impl Warning {
    pub(crate) fn unrecognized(offset: usize, text: &str) -> Self {
        Warning {
            offset,
            kind: WarningKind::UnrecognizedInput,
            text: text.to_string(),
        }
    }

    pub(crate) fn unstacked(offset: usize, text: &str) -> Self {
        Warning {
            offset,
            kind: WarningKind::UnstackedCluster,
            text: text.to_string(),
        }
    }

    pub(crate) fn dangling(offset: usize, text: &str) -> Self {
        Warning {
            offset,
            kind: WarningKind::DanglingSubjoinMarker,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::UnrecognizedInput => {
                write!(f, "offset {}: unrecognized input {:?}", self.offset, self.text)
            }
            WarningKind::UnstackedCluster => write!(
                f,
                "offset {}: consonant {:?} left as its own stack",
                self.offset, self.text
            ),
            WarningKind::DanglingSubjoinMarker => write!(
                f,
                "offset {}: subjoin marker with nothing to attach",
                self.offset
            ),
        }
    }
}

/// Output of one conversion call: the EWTS text plus every diagnostic
/// collected along the way. Conversion never fails on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub ewts: String,
    pub warnings: Vec<Warning>,
}

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// The ACIP → EWTS transducer: an immutable mapping table compiled into a
/// trie, shareable across threads without locking.
pub struct Transducer {
    trie: MappingTrie,
    convention: Convention,
}

impl Transducer {
    pub fn new(table: MappingTable) -> Self {
        let trie = MappingTrie::from_table(&table);
        Transducer {
            trie,
            convention: table.convention,
        }
    }

    /// Build a transducer from mapping-table TOML, validating eagerly.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Ok(Transducer::new(parse_table_toml(toml_str)?))
    }

    /// Set a custom table TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide default transducer.
    pub fn global() -> &'static Transducer {
        static INSTANCE: OnceLock<Transducer> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let table = parse_table_toml(toml_str).expect("mapping table TOML must be valid");
            Transducer::new(table)
        })
    }

    /// Convert one ACIP string to EWTS.
    pub fn convert(&self, acip: &str) -> ConversionResult {
        let _span = debug_span!("convert", len = acip.len()).entered();
        let mut warnings = Vec::new();
        let tokens = tokenizer::tokenize(&self.trie, acip, &mut warnings);
        let stacks = stack::resolve(tokens, &self.convention, &mut warnings);
        let ewts = render::render(&stacks, &self.convention);
        debug!(out_len = ewts.len(), warning_count = warnings.len());
        ConversionResult { ewts, warnings }
    }
}

/// Convert with the process-wide default mapping table.
pub fn convert(acip: &str) -> ConversionResult {
    Transducer::global().convert(acip)
}
