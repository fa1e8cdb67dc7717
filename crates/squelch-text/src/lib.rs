//! Squelch Text: repeating-substring detection and run collapsing.
//!
//! Stages:
//! 1. Decode (text into its code-point sequence)
//! 2. Scan (recurrence search for candidate substrings)
//! 3. Score (per-value aggregation under a counting policy)
//! 4. Filter (keep values scoring strictly above the threshold)
//! 5. Collapse (rewrite each maximal run down to a single copy)

pub mod cancel;
pub mod collapse;
pub mod pipeline;
pub mod scan;
pub mod score;

pub use cancel::CancelToken;
pub use pipeline::{collapse_repeats, CollapseOutcome, RepeatCollapser};
pub use score::ScoredRepeat;
pub use squelch_core::config::ScorePolicy;
