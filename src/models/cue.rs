use serde::Serialize;

use super::Timestamp;

/// A single caption cue attributed to one speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cue {
    /// Start time of the cue
    pub start: Timestamp,
    /// Speaker identifier taken from the voice tag, trimmed
    pub speaker: String,
    /// Utterance text inside the voice tag, trimmed and never empty
    pub text: String,
}

impl Cue {
    pub fn new(start: Timestamp, speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start,
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// A turn is a run of consecutive cues from the same speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// Start time of the first cue in the run
    pub start: Timestamp,
    /// Speaker shared by every cue in the run
    pub speaker: String,
    /// Cue texts joined with single spaces
    pub text: String,
    /// Number of cues merged into this turn
    pub cue_count: usize,
}

impl Turn {
    /// Open a new turn from the first cue of a run
    pub fn from_cue(cue: &Cue) -> Self {
        Self {
            start: cue.start.clone(),
            speaker: cue.speaker.clone(),
            text: cue.text.clone(),
            cue_count: 1,
        }
    }

    /// Append a same-speaker cue to this turn. Start time is left untouched.
    pub(crate) fn absorb(&mut self, cue: &Cue) {
        self.text.push(' ');
        self.text.push_str(&cue.text);
        self.cue_count += 1;
    }

    /// Whitespace-separated word count of the turn text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
