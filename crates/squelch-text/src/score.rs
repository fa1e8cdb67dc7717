//! Candidate enumeration and repetition scoring.

use crate::cancel::CancelToken;
use crate::scan;
use squelch_core::config::ScorePolicy;
use squelch_core::{Result, SquelchError};
use std::collections::HashMap;

/// A candidate substring and its aggregated repetition score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRepeat {
    pub value: String,
    pub score: usize,
}

/// Score every repeating substring of `seq` under `policy`.
///
/// Results come back in discovery order: by start position, then by
/// candidate length. Cancellation is checked on entry and once per start
/// position.
pub fn score_repeats(
    seq: &[char],
    policy: ScorePolicy,
    cancel: Option<&CancelToken>,
) -> Result<Vec<ScoredRepeat>> {
    check_cancelled(cancel)?;
    match policy {
        ScorePolicy::TotalRecurrence => total_recurrence(seq, cancel),
        ScorePolicy::MaxConsecutiveRun => max_consecutive_run(seq, cancel),
    }
}

/// Grow a candidate from every start position and sum the recurrence counts
/// found strictly after each grown candidate's end.
///
/// The same physical repetition can feed the totals of several candidates
/// sharing a suffix, biasing scores toward longer nested repeats.
fn total_recurrence(seq: &[char], cancel: Option<&CancelToken>) -> Result<Vec<ScoredRepeat>> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, usize> = HashMap::new();

    for j in 0..seq.len() {
        check_cancelled(cancel)?;
        for i in j..seq.len() {
            let candidate = &seq[j..=i];
            match scan::find_recurrence(seq, candidate, i + 1) {
                Some(rec) => {
                    let value: String = candidate.iter().collect();
                    if !totals.contains_key(&value) {
                        order.push(value.clone());
                    }
                    *totals.entry(value).or_insert(0) += rec.count;
                }
                // No recurrence for this candidate means none for any
                // extension of it either; the rest of this growth is dead.
                None => break,
            }
        }
    }

    Ok(collect_scores(order, totals))
}

/// Score each value by its largest number of back-to-back copies.
///
/// Only values with at least one doubled run are reported; a value that
/// never repeats adjacently cannot form a collapsible run.
fn max_consecutive_run(seq: &[char], cancel: Option<&CancelToken>) -> Result<Vec<ScoredRepeat>> {
    let n = seq.len();
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, usize> = HashMap::new();

    for j in 0..n {
        check_cancelled(cancel)?;
        for m in 1..=(n - j) / 2 {
            if seq[j + m..j + 2 * m] != seq[j..j + m] {
                continue;
            }
            // Interior offsets of a run would re-measure a shorter tail;
            // only measure from the run start.
            if j >= m && seq[j - m..j] == seq[j..j + m] {
                continue;
            }
            let mut copies = 2;
            while j + (copies + 1) * m <= n
                && seq[j + copies * m..j + (copies + 1) * m] == seq[j..j + m]
            {
                copies += 1;
            }
            let value: String = seq[j..j + m].iter().collect();
            if !best.contains_key(&value) {
                order.push(value.clone());
            }
            let score = best.entry(value).or_insert(0);
            if copies > *score {
                *score = copies;
            }
        }
    }

    Ok(collect_scores(order, best))
}

fn collect_scores(order: Vec<String>, scores: HashMap<String, usize>) -> Vec<ScoredRepeat> {
    order
        .into_iter()
        .map(|value| {
            let score = scores.get(&value).copied().unwrap_or(0);
            ScoredRepeat { value, score }
        })
        .collect()
}

fn check_cancelled(cancel: Option<&CancelToken>) -> Result<()> {
    if let Some(token) = cancel {
        if token.is_cancelled() {
            return Err(SquelchError::Cancelled);
        }
    }
    Ok(())
}
