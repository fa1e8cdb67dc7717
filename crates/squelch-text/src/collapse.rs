//! Run collapsing: rewrite maximal consecutive runs to a single copy.

use regex::{NoExpand, Regex};
use squelch_core::{Result, SquelchError};

/// Replace every maximal run of back-to-back `value` repetitions in `text`
/// with a single copy of `value`.
///
/// The value is matched as a literal; regex metacharacters in it have no
/// effect. A run of one is rewritten to itself, so values that never repeat
/// adjacently leave the text unchanged.
pub fn collapse_runs(text: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Ok(text.to_string());
    }
    let pattern = format!("(?:{})+", regex::escape(value));
    let re = Regex::new(&pattern).map_err(|e| SquelchError::Pattern(e.to_string()))?;
    Ok(re.replace_all(text, NoExpand(value)).into_owned())
}
