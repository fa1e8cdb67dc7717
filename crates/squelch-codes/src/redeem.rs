//! Redemption code envelope parsing.
//!
//! Codes travel as `#PAYLOAD#`. Trial codes carry a `TRIAL-` prefix inside
//! the envelope.

use std::sync::LazyLock;

use regex::Regex;
use squelch_core::config::CodesConfig;

static RE_ENVELOPE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^#.*#$").unwrap());
static RE_TRIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#TRIAL-([a-zA-Z0-9]+)#$").unwrap());

/// Extracts the payload from a `#...#` envelope when it is exactly `length`
/// alphanumeric characters. Surrounding spaces are ignored.
pub fn get_code(content: &str, length: usize) -> Option<String> {
    let trimmed = content.trim_matches(' ');
    let pattern = format!("^#[a-zA-Z0-9]{{{length}}}#$");
    let re = Regex::new(&pattern).ok()?;
    if re.is_match(trimmed) {
        Some(trimmed.replace('#', ""))
    } else {
        None
    }
}

/// [`get_code`] with the payload length taken from the codes config.
pub fn get_code_with_config(content: &str, config: &CodesConfig) -> Option<String> {
    get_code(content, config.redeem_length)
}

/// Reports whether the text is shaped like a code envelope, regardless of
/// what the envelope holds.
pub fn check_code_format(content: &str) -> bool {
    RE_ENVELOPE.is_match(content.trim_matches(' '))
}

/// Extracts the payload of a trial code envelope.
pub fn get_trial_code(content: &str) -> Option<String> {
    RE_TRIAL
        .captures(content.trim_matches(' '))
        .map(|caps| caps[1].to_string())
}
