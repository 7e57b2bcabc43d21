use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::models::{Cue, Timestamp, TimestampError};

/// Header token that opens every WebVTT file
pub const WEBVTT_HEADER: &str = "WEBVTT";

/// Marker separating start and end times on a timing line
pub const TIMING_ARROW: &str = "-->";

fn block_separator_regex() -> &'static Regex {
    static BLOCK_SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    // Two or more consecutive newlines; a line holding only spaces does not separate
    BLOCK_SEPARATOR_REGEX
        .get_or_init(|| Regex::new(r"\n{2,}").expect("Failed to compile block separator regex"))
}

fn voice_tag_regex() -> &'static Regex {
    static VOICE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    VOICE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"<v\s+([^>]+)>(.+?)</v>").expect("Failed to compile voice tag regex")
    })
}

/// Why a block was not turned into a cue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("block has fewer than 2 lines")]
    TooFewLines,
    #[error("no timing line")]
    MissingTimingLine,
    #[error("no text after the timing line")]
    MissingText,
    #[error(transparent)]
    MalformedTiming(#[from] TimestampError),
    #[error("no <v Speaker>...</v> span")]
    MissingVoiceTag,
    #[error("voice span has no text")]
    EmptyText,
}

/// Result of parsing a WebVTT document
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Cues in file order
    pub cues: Vec<Cue>,
    /// Candidate cue blocks seen (header and empty blocks excluded)
    pub blocks_seen: usize,
    /// Candidate blocks dropped as malformed
    pub blocks_skipped: usize,
}

/// Parse raw WebVTT text into speaker-attributed cues.
///
/// Malformed blocks never abort the parse. Each one is logged at debug level
/// and counted in `blocks_skipped`.
pub fn parse_vtt(raw: &str) -> ParseResult {
    let normalized = raw
        .trim_start_matches('\u{FEFF}')
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let mut result = ParseResult::default();

    for (index, block) in block_separator_regex().split(&normalized).enumerate() {
        let block = block.trim();
        if block.is_empty() || block == WEBVTT_HEADER {
            continue;
        }

        result.blocks_seen += 1;
        match parse_block(block) {
            Ok(cue) => result.cues.push(cue),
            Err(reason) => {
                debug!("Skipping block {}: {}", index, reason);
                result.blocks_skipped += 1;
            }
        }
    }

    result
}

/// Parse raw WebVTT text, keeping only the cues
pub fn parse_cues(raw: &str) -> Vec<Cue> {
    parse_vtt(raw).cues
}

/// Parse one trimmed, non-empty block into a cue
pub fn parse_block(block: &str) -> Result<Cue, SkipReason> {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() < 2 {
        return Err(SkipReason::TooFewLines);
    }

    // Anything before the timing line (e.g. a cue identifier) is ignored
    let timing_index = lines
        .iter()
        .position(|line| line.contains(TIMING_ARROW))
        .ok_or(SkipReason::MissingTimingLine)?;

    let text_lines = &lines[timing_index + 1..];
    if text_lines.is_empty() {
        return Err(SkipReason::MissingText);
    }

    let start = Timestamp::parse_prefix(lines[timing_index])?;

    let full_text = text_lines.join(" ");
    let caps = voice_tag_regex()
        .captures(&full_text)
        .ok_or(SkipReason::MissingVoiceTag)?;

    let speaker = caps[1].trim();
    let text = caps[2].trim();
    if text.is_empty() {
        return Err(SkipReason::EmptyText);
    }

    Ok(Cue::new(start, speaker, text))
}
