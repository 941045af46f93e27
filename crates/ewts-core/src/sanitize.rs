//! Cleanup pass for archival ACIP text.
//!
//! Input files accumulate stray control characters, mixed line endings,
//! and double spacing over decades of keyboarding. `sanitize` normalizes
//! all of that before conversion. It is caller opt-in: the core
//! transducer never rewrites its input, so warning offsets always refer
//! to the string actually converted.

/// Strip non-ASCII/control characters and normalize whitespace.
///
/// Keeps TAB, line breaks, and printable ASCII; turns CRLF and bare CR
/// into LF; drops spaces directly after a line break; collapses space
/// runs to a single space.
pub fn sanitize(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|&c| c == '\t' || c == '\n' || c == '\r' || (' '..='~').contains(&c))
        .collect();
    let kept = kept.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(kept.len());
    let mut prev = None;
    for c in kept.chars() {
        if c == ' ' && matches!(prev, Some('\n') | Some(' ')) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
