//! Matching engine.
//!
//! The engine has two strictly layered halves. The builder runs once, when a
//! parser is constructed; the scanner runs on every parse call and only reads
//! the finished trie.
//!
//! ```text
//! Dictionary ──> Trie::build (trie.rs)
//!                 - "(id)" for every identifier
//!                 - each symbol + mirror(symbol) (mirror.rs)
//!                        │
//!                        v
//! text ── decode_angle_entities (render.rs)
//!                        │
//!                        v
//!                  scan (scanner.rs)
//!                    - walk trie per char
//!                    - commit on terminal + whitespace
//!                    - write back failed candidates
//!                        │
//!                        v
//!             ScanOutput { text, matches, metrics }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trie.rs`: arena prefix tree and its builder.
//! - `mirror.rs`: right-to-left symbol forms.
//! - `scanner.rs`: the character loop.
//! - `render.rs`: output formats and entity decoding.
//! - `tree_print.rs`: tree diagrams for debug mode.
//! - `metrics.rs`: timings surfaced by verbose parses.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/mirror.rs"]
mod mirror;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/tree_print.rs"]
mod tree_print;
#[path = "engine/trie.rs"]
mod trie;

pub use metrics::ScanMetrics;
pub use mirror::mirror;
pub use render::{Format, Renderer, decode_angle_entities};
pub use scanner::{EmoticonMatch, scan};
pub use tree_print::{TreeStyle, render_tree};
pub use trie::Trie;
