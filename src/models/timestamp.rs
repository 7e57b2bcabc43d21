use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Errors produced when reading a cue start time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timing line does not start with HH:MM:SS.mmm: {0:?}")]
    Malformed(String),
}

fn start_timestamp_regex() -> &'static Regex {
    static START_TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();
    START_TIMESTAMP_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{3})")
            .expect("Failed to compile timestamp regex")
    })
}

/// A cue start time in `HH:MM:SS.mmm` form, kept exactly as written in the file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Read the timestamp at the very start of a timing line.
    ///
    /// Only the leading `HH:MM:SS.mmm` is consumed; the arrow and end time are ignored.
    pub fn parse_prefix(line: &str) -> Result<Self, TimestampError> {
        start_timestamp_regex()
            .captures(line)
            .and_then(|caps| caps.get(0))
            .map(|m| Self(m.as_str().to_string()))
            .ok_or_else(|| TimestampError::Malformed(line.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The timestamp truncated to whole seconds (`HH:MM:SS`)
    pub fn whole_seconds(&self) -> &str {
        // Always ASCII, validated on construction
        &self.0[..8]
    }

    /// Milliseconds since the start of the media
    pub fn as_millis(&self) -> u64 {
        let field = |range: std::ops::Range<usize>| -> u64 {
            self.0[range].parse().unwrap_or(0)
        };
        let hours = field(0..2);
        let minutes = field(3..5);
        let seconds = field(6..8);
        let millis = field(9..12);
        ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
