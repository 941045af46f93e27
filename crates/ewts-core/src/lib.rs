//! ACIP → EWTS transliteration.
//!
//! A pure, stateless transducer from ACIP's ASCII encoding of Tibetan to
//! the Extended Wylie Transliteration Scheme. The mapping table is
//! swappable TOML configuration; conversion itself never performs I/O
//! and never fails on malformed input.

pub mod sanitize;
pub mod table;
pub mod transducer;
pub(crate) mod trie;

pub use table::{parse_table_toml, MappingTable, TableError};
pub use transducer::{convert, ConversionResult, Token, TokenClass, Transducer, Warning, WarningKind};
