use tracing::{debug, debug_span};

use super::tokenizer::{Token, TokenClass};
use super::Warning;
use crate::table::Convention;

/// One resolved orthographic unit.
///
/// The three shapes are distinct variants so that an invalid combination
/// (a passthrough with modifiers, a vowel carrier with subscripts) is
/// unrepresentable.
#[derive(Debug, Clone)]
pub(crate) enum Stack {
    /// Consonant cluster: superscripts ride above the base, subscripts
    /// hang below it, the vowel (if any) closes the syllable.
    Syllable {
        supers: Vec<Token>,
        base: Token,
        subs: Vec<Token>,
        vowel: Option<Token>,
    },
    /// Vowel-only syllable on the implicit default base.
    BareVowel { vowel: Token },
    /// Token carried through unchanged.
    Passthrough { token: Token },
}

struct OpenStack {
    supers: Vec<Token>,
    base: Token,
    subs: Vec<Token>,
    /// Subjoin marker waiting for its consonant.
    pending: Option<Token>,
}

impl OpenStack {
    fn new(base: Token) -> Self {
        OpenStack {
            supers: Vec::new(),
            base,
            subs: Vec::new(),
            pending: None,
        }
    }

    fn close(mut self, vowel: Option<Token>, warnings: &mut Vec<Warning>) -> Stack {
        if let Some(marker) = self.pending.take() {
            warnings.push(Warning::dangling(marker.offset, &marker.raw));
        }
        Stack::Syllable {
            supers: self.supers,
            base: self.base,
            subs: self.subs,
            vowel,
        }
    }
}

/// Group tokens into stacks per the ACIP tie-break policy:
///
/// - a consonant after a subjoin marker attaches as a subscript;
/// - a prefix-set consonant directly before another consonant attaches
///   as a superscript;
/// - any other consonant-on-consonant sequence falls back to independent
///   stacks, with a warning;
/// - a vowel fills and closes the open stack, or rides the default base;
/// - digits, punctuation, whitespace, and unrecognized tokens close the
///   open stack and pass through.
pub(crate) fn resolve(
    tokens: Vec<Token>,
    convention: &Convention,
    warnings: &mut Vec<Warning>,
) -> Vec<Stack> {
    let _span = debug_span!("resolve", token_count = tokens.len()).entered();
    let mut stacks = Vec::new();
    let mut open: Option<OpenStack> = None;

    for token in tokens {
        match token.class {
            TokenClass::Consonant => match open {
                Some(ref mut st) if st.pending.is_some() => {
                    st.pending = None;
                    st.subs.push(token);
                }
                Some(ref mut st) if st.subs.is_empty() && convention.is_prefix(&st.base.raw) => {
                    // Promote the base to the superscript chain; the
                    // incoming consonant becomes the new base.
                    let prev = std::mem::replace(&mut st.base, token);
                    st.supers.push(prev);
                }
                Some(_) => {
                    warnings.push(Warning::unstacked(token.offset, &token.raw));
                    if let Some(st) = open.take() {
                        stacks.push(st.close(None, warnings));
                    }
                    open = Some(OpenStack::new(token));
                }
                None => open = Some(OpenStack::new(token)),
            },

            TokenClass::Vowel => match open.take() {
                Some(st) => stacks.push(st.close(Some(token), warnings)),
                None => stacks.push(Stack::BareVowel { vowel: token }),
            },

            TokenClass::SubjoinMarker => match open.as_mut() {
                Some(st) => {
                    if let Some(prev) = st.pending.replace(token) {
                        warnings.push(Warning::dangling(prev.offset, &prev.raw));
                    }
                }
                None => {
                    warnings.push(Warning::dangling(token.offset, &token.raw));
                    stacks.push(Stack::Passthrough { token });
                }
            },

            TokenClass::Digit
            | TokenClass::Punctuation
            | TokenClass::Whitespace
            | TokenClass::Unrecognized => {
                if let Some(st) = open.take() {
                    stacks.push(st.close(None, warnings));
                }
                stacks.push(Stack::Passthrough { token });
            }
        }
    }

    if let Some(st) = open.take() {
        stacks.push(st.close(None, warnings));
    }

    debug!(stack_count = stacks.len());
    stacks
}
