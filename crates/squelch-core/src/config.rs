use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquelchConfig {
    pub cleanup: CleanupConfig,
    pub codes: CodesConfig,
    pub signing: SigningConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Substrings scoring strictly above this count get collapsed.
    pub repeat_threshold: usize,
    pub policy: ScorePolicy,
}

/// How a candidate substring's repetition is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Sum of recurrence counts over every grown candidate, matches
    /// separated by unrelated text included. Can double count the same
    /// physical repetition; kept for output compatibility.
    TotalRecurrence,
    /// Largest number of back-to-back copies anywhere in the sequence.
    MaxConsecutiveRun,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::MaxConsecutiveRun
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodesConfig {
    pub redeem_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    pub key_path: String,
}

impl Default for SquelchConfig {
    fn default() -> Self {
        Self {
            cleanup: CleanupConfig {
                repeat_threshold: 3,
                policy: ScorePolicy::MaxConsecutiveRun,
            },
            codes: CodesConfig { redeem_length: 8 },
            signing: SigningConfig {
                key_path: "certs/apiclient_key.pem".into(),
            },
        }
    }
}

impl SquelchConfig {
    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
