//! Mapping-table configuration: ACIP pattern → token class → EWTS form.
//!
//! The table is data, not logic: dialect variants are alternative TOML
//! documents, validated once at construction and immutable afterwards.

mod config;

pub use config::{parse_table_toml, Convention, MappingTable, TableError};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_acip.toml");

/// Returns the embedded default mapping table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
