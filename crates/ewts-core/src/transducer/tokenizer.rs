use tracing::{debug, debug_span};

use super::Warning;
use crate::trie::MappingTrie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Consonant,
    Vowel,
    SubjoinMarker,
    Digit,
    Punctuation,
    Whitespace,
    Unrecognized,
}

/// One matched span of input. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub class: TokenClass,
    /// Byte offset of the match in the input string.
    pub offset: usize,
    /// The matched input text.
    pub raw: String,
    /// The EWTS replacement (equal to `raw` for pass-through classes).
    pub ewts: String,
}

impl Token {
    fn passthrough(class: TokenClass, offset: usize, raw: &str) -> Self {
        Token {
            class,
            offset,
            raw: raw.to_string(),
            ewts: raw.to_string(),
        }
    }
}

/// Split `input` into tokens by greedy longest-match against the table.
///
/// Total function: anything the table does not cover becomes a
/// single-character `Unrecognized` token plus a warning. Whitespace runs
/// and digits are classified ahead of the table and pass through 1:1.
pub(crate) fn tokenize(trie: &MappingTrie, input: &str, warnings: &mut Vec<Warning>) -> Vec<Token> {
    let _span = debug_span!("tokenize", len = input.len()).entered();
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_whitespace() {
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            tokens.push(Token::passthrough(
                TokenClass::Whitespace,
                start,
                &input[start..pos],
            ));
            continue;
        }

        if bytes[pos].is_ascii_digit() {
            tokens.push(Token::passthrough(
                TokenClass::Digit,
                pos,
                &input[pos..pos + 1],
            ));
            pos += 1;
            continue;
        }

        if let Some(m) = trie.longest_match(&bytes[pos..]) {
            tokens.push(Token {
                class: m.class,
                offset: pos,
                raw: input[pos..pos + m.len].to_string(),
                ewts: m.ewts.to_string(),
            });
            pos += m.len;
            continue;
        }

        // Nothing matched: emit one char (not one byte, so multi-byte
        // input is carried through intact) and record the span.
        let ch = match input[pos..].chars().next() {
            Some(c) => c,
            None => break,
        };
        let end = pos + ch.len_utf8();
        warnings.push(Warning::unrecognized(pos, &input[pos..end]));
        tokens.push(Token::passthrough(
            TokenClass::Unrecognized,
            pos,
            &input[pos..end],
        ));
        pos = end;
    }

    debug!(token_count = tokens.len());
    tokens
}
