//! Parse run metrics.
//!
//! Collected on every scan (they are a handful of `Instant` reads) but only
//! surfaced through `EmoticonsParser::parse_verbose`.

use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct ScanMetrics {
    /// Total elapsed time for the parse call.
    pub total: Duration,
    /// Time spent decoding `&lt;`/`&gt;`.
    pub decode: Duration,
    /// Time spent in the character loop.
    pub scan: Duration,
    /// Characters visited, the synthetic leading space included.
    pub chars_scanned: usize,
}
