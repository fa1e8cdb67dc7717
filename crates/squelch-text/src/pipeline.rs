//! Collapse pipeline: decode, score, filter, rewrite.

use crate::cancel::CancelToken;
use crate::collapse;
use crate::scan;
use crate::score::{self, ScoredRepeat};
use squelch_core::config::{CleanupConfig, ScorePolicy};
use squelch_core::{Result, SquelchError};
use tracing::warn;

/// Collapse result with statistics.
#[derive(Debug, Clone)]
pub struct CollapseOutcome {
    pub output: String,
    pub original_len: usize,
    pub collapsed_len: usize,
    /// Qualifying values whose collapse pass ran, longest first.
    pub applied: Vec<ScoredRepeat>,
    /// True when an internal error was recovered and `output` is the best
    /// text computed before it.
    pub recovered: bool,
}

impl CollapseOutcome {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.collapsed_len as f64 / self.original_len as f64
    }
}

/// The repeat collapser.
pub struct RepeatCollapser {
    pub threshold: usize,
    pub policy: ScorePolicy,
    cancel: Option<CancelToken>,
}

impl RepeatCollapser {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            policy: ScorePolicy::default(),
            cancel: None,
        }
    }

    pub fn from_config(config: &CleanupConfig) -> Self {
        Self {
            threshold: config.repeat_threshold,
            policy: config.policy,
            cancel: None,
        }
    }

    pub fn with_policy(mut self, policy: ScorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Collapse runs of repeating substrings, recovering from any internal
    /// error.
    ///
    /// Never fails: on an internal error the best text computed so far is
    /// returned, the failure is logged, and the outcome is marked recovered.
    pub fn collapse(&self, text: &str) -> CollapseOutcome {
        let (mut outcome, err) = self.run(text);
        if let Some(err) = err {
            warn!(error = %err, "repeat collapse recovered, returning best text so far");
            outcome.recovered = true;
        }
        outcome
    }

    /// Collapse runs of repeating substrings, propagating internal errors.
    pub fn try_collapse(&self, text: &str) -> Result<CollapseOutcome> {
        let (outcome, err) = self.run(text);
        match err {
            Some(err) => Err(err),
            None => Ok(outcome),
        }
    }

    fn run(&self, text: &str) -> (CollapseOutcome, Option<SquelchError>) {
        let original_len = text.len();
        let mut outcome = CollapseOutcome {
            output: text.to_string(),
            original_len,
            collapsed_len: original_len,
            applied: Vec::new(),
            recovered: false,
        };

        let seq = scan::decode(text);
        let scored = match score::score_repeats(&seq, self.policy, self.cancel.as_ref()) {
            Ok(scored) => scored,
            Err(err) => return (outcome, Some(err)),
        };

        let mut qualifying: Vec<ScoredRepeat> = scored
            .into_iter()
            .filter(|s| s.score > self.threshold)
            .collect();
        // Longest values first so nested repeats collapse before their
        // fragments; ties keep discovery order.
        qualifying.sort_by(|a, b| b.value.chars().count().cmp(&a.value.chars().count()));

        for repeat in qualifying {
            match collapse::collapse_runs(&outcome.output, &repeat.value) {
                Ok(next) => {
                    outcome.output = next;
                    outcome.applied.push(repeat);
                }
                Err(err) => {
                    outcome.collapsed_len = outcome.output.len();
                    return (outcome, Some(err));
                }
            }
        }

        outcome.collapsed_len = outcome.output.len();
        (outcome, None)
    }
}

impl Default for RepeatCollapser {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Collapse maximal consecutive runs of substrings scoring above `repeat`.
///
/// The one-call form: default counting policy, no cancellation, internal
/// errors recovered. Returns the input unchanged when nothing qualifies.
pub fn collapse_repeats(text: &str, repeat: usize) -> String {
    RepeatCollapser::new(repeat).collapse(text).output
}
