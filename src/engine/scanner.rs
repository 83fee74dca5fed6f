//! Single-pass text scanner.
//!
//! The scanner walks the (space-prefixed) input one `char` at a time and
//! follows the trie in lock-step. It keeps three pieces of state:
//!
//! - `current`: the trie node reached so far (`ROOT` when outside any candidate)
//! - `out`: the output accumulator
//! - `pending`: characters consumed by the current candidate that are not yet
//!   written, including the boundary space that started it
//!
//! ```text
//!        ┌──────── char matches child ─────────┐
//!        v                                     │
//!   AT_ROOT ── ' ' ──> IN_CANDIDATE(node) ─────┘
//!      ^                    │    │
//!      │  no child: flush   │    │ terminal && next is whitespace:
//!      └─── pending + c ────┘    │ emit " " + rendering, drop pending
//!      └─────────────────────────┘
//! ```
//!
//! A literal only matches when the character right after it is whitespace (or
//! the end of input). Nothing is checked before a literal; since a failed
//! candidate falls back to the root, whose only child is the space node, a
//! literal glued to a preceding word does not start a candidate either.

use super::metrics::ScanMetrics;
use super::trie::{NodeId, ROOT, Trie};
use std::time::Instant;

/// One committed match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmoticonMatch {
    /// Canonical identifier.
    pub id: String,
    /// The literal as typed, without the leading space.
    pub literal: String,
    /// Start char offset in the decoded input (inclusive).
    pub start: usize,
    /// End char offset in the decoded input (exclusive).
    pub end: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub text: String,
    pub matches: Vec<EmoticonMatch>,
    pub metrics: ScanMetrics,
}

/// Scan `text` (already entity-decoded) against `trie`.
///
/// `render` turns an identifier into its output form.
pub fn scan<R>(trie: &Trie, text: &str, render: R) -> ScanOutput
where
    R: Fn(&str) -> String,
{
    let started = Instant::now();
    let chars: Vec<char> = std::iter::once(' ').chain(text.chars()).collect();
    let entry = trie.entry().unwrap_or(ROOT);

    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    let mut matches = Vec::new();
    let mut current: NodeId = ROOT;

    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            out.push_str(&pending);
            pending.clear();
            out.push(c);
            current = entry;
            continue;
        }

        let node = trie.node(current);
        let next = chars.get(i + 1).copied().unwrap_or(' ');

        let step = if node.children.is_empty() {
            None
        } else if c == ' ' {
            // An unfinished candidate before the space is real text; a run of
            // spaces alone collapses.
            if pending.chars().any(|p| p != ' ') {
                out.push_str(&pending);
                pending.clear();
            }
            Some(entry)
        } else {
            trie.child(current, c)
        };

        match step {
            Some(child) => {
                current = child;
                let terminal = if c != ' ' && next.is_whitespace() { trie.node(child).terminal.as_ref() } else { None };
                if let Some(terminal) = terminal {
                    let literal = terminal.value[1..].to_string();
                    // `chars` is shifted by the leading space, so `i` is the exclusive end.
                    let end = i;
                    let start = end - literal.chars().count();
                    log::debug!("matched {literal:?} as {} at {start}..{end}", terminal.id);

                    out.push(' ');
                    out.push_str(&render(&terminal.id));
                    matches.push(EmoticonMatch { id: terminal.id.clone(), literal, start, end });
                    pending.clear();
                    current = ROOT;
                } else {
                    pending.push(c);
                }
            }
            None => {
                current = ROOT;
                out.push_str(&pending);
                pending.clear();
                out.push(c);
            }
        }
    }
    out.push_str(&pending);

    let text = out.trim().to_string();
    let metrics = ScanMetrics { scan: started.elapsed(), chars_scanned: chars.len(), ..ScanMetrics::default() };
    ScanOutput { text, matches, metrics }
}
