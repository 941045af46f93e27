use std::collections::HashMap;

use crate::table::MappingTable;
use crate::transducer::TokenClass;

/// A longest-match hit: `len` input bytes map to `ewts` under `class`.
#[derive(Debug, PartialEq)]
pub(crate) struct TrieMatch<'a> {
    pub len: usize,
    pub class: TokenClass,
    pub ewts: &'a str,
}

struct Node {
    children: HashMap<u8, Node>,
    entry: Option<(TokenClass, String)>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }
}

/// Byte trie over the mapping table's ACIP patterns.
///
/// Greedy longest-match is realized by remembering the deepest accepting
/// node on a single walk; there is no backtracking past a committed match.
pub(crate) struct MappingTrie {
    root: Node,
}

impl MappingTrie {
    pub fn from_table(table: &MappingTable) -> Self {
        let mut trie = MappingTrie { root: Node::new() };
        for (pattern, ewts) in &table.consonants {
            trie.insert(pattern, TokenClass::Consonant, ewts);
        }
        for (pattern, ewts) in &table.vowels {
            trie.insert(pattern, TokenClass::Vowel, ewts);
        }
        for (pattern, ewts) in &table.marks {
            trie.insert(pattern, TokenClass::Punctuation, ewts);
        }
        let marker = table.convention.subjoin_marker.to_string();
        trie.insert(&marker, TokenClass::SubjoinMarker, &marker);
        trie
    }

    /// Longest pattern matching a prefix of `input`, if any.
    pub fn longest_match(&self, input: &[u8]) -> Option<TrieMatch<'_>> {
        let mut node = &self.root;
        let mut best = None;
        for (i, &b) in input.iter().enumerate() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some((class, ewts)) = &node.entry {
                best = Some(TrieMatch {
                    len: i + 1,
                    class: *class,
                    ewts,
                });
            }
        }
        best
    }

    fn insert(&mut self, pattern: &str, class: TokenClass, ewts: &str) {
        let mut node = &mut self.root;
        for &b in pattern.as_bytes() {
            node = node.children.entry(b).or_insert_with(Node::new);
        }
        node.entry = Some((class, ewts.to_string()));
    }
}
