use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Turn;

/// Machine-readable output format
#[derive(Debug, Clone, Serialize)]
pub struct MachineTranscript {
    /// Document title
    pub title: String,
    /// Consolidated turns in order
    pub turns: Vec<MachineTurn>,
    /// Metadata about the processing
    pub metadata: TranscriptMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct MachineTurn {
    pub start: String,
    pub start_ms: u64,
    pub speaker: String,
    pub text: String,
    pub cue_count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscriptMetadata {
    pub total_cues: usize,
    pub total_turns: usize,
    pub blocks_skipped: usize,
    /// Speakers in order of first appearance
    pub speakers: Vec<String>,
}

impl TranscriptMetadata {
    /// Build metadata for a consolidated transcript
    pub fn from_turns(turns: &[Turn], total_cues: usize, blocks_skipped: usize) -> Self {
        let mut speakers: Vec<String> = Vec::new();
        for turn in turns {
            if !speakers.contains(&turn.speaker) {
                speakers.push(turn.speaker.clone());
            }
        }

        Self {
            total_cues,
            total_turns: turns.len(),
            blocks_skipped,
            speakers,
        }
    }
}

impl MachineTranscript {
    pub fn from_turns(turns: &[Turn], title: &str, metadata: TranscriptMetadata) -> Self {
        let turns = turns
            .iter()
            .map(|t| MachineTurn {
                start: t.start.to_string(),
                start_ms: t.start.as_millis(),
                speaker: t.speaker.clone(),
                text: t.text.clone(),
                cue_count: t.cue_count,
            })
            .collect();

        Self {
            title: title.to_string(),
            turns,
            metadata,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Markdown transcript: a title line followed by one bold-prefixed line per turn
pub struct MarkdownTranscript<'a> {
    turns: &'a [Turn],
    title: &'a str,
}

impl<'a> MarkdownTranscript<'a> {
    pub fn new(turns: &'a [Turn], title: &'a str) -> Self {
        Self { turns, title }
    }

    /// Format the transcript as Markdown
    pub fn format(&self) -> String {
        let mut lines = Vec::with_capacity(self.turns.len() + 1);
        lines.push(format!("# {}\n", self.title));

        for turn in self.turns {
            lines.push(format!(
                "**[{}] {}:** {}\n",
                turn.start.whole_seconds(),
                turn.speaker,
                turn.text
            ));
        }

        // Every element ends in a newline, so joining leaves a blank line between them
        lines.join("\n")
    }

    /// Write to a Markdown file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())
            .with_context(|| format!("Failed to write transcript: {:?}", path))?;
        Ok(())
    }
}
