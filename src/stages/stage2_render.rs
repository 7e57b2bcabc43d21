use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::{MachineTranscript, MarkdownTranscript, TranscriptMetadata};
use crate::models::Turn;

/// Title used when none is configured
pub const DEFAULT_TITLE: &str = "Meeting Transcript";

/// Configuration for rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Text of the top-level `#` heading
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Result of rendering
#[derive(Debug)]
pub struct RenderResult {
    /// Path to the Markdown transcript
    pub markdown_path: PathBuf,
    /// Path to the JSON transcript (if generated)
    pub json_path: Option<PathBuf>,
}

/// Render turns as a Markdown transcript with the default title
pub fn render(turns: &[Turn]) -> String {
    render_with_config(turns, &RenderConfig::default())
}

pub fn render_with_config(turns: &[Turn], config: &RenderConfig) -> String {
    MarkdownTranscript::new(turns, &config.title).format()
}

/// Write the rendered transcript to disk.
///
/// Always writes the Markdown view; the JSON view is written only when a path is given.
pub fn execute_render(
    turns: &[Turn],
    metadata: TranscriptMetadata,
    markdown_output: &Path,
    json_output: Option<&Path>,
    config: &RenderConfig,
) -> Result<RenderResult> {
    info!("Writing Markdown transcript to {:?}", markdown_output);
    MarkdownTranscript::new(turns, &config.title).write_file(markdown_output)?;

    let mut json_path = None;
    if let Some(path) = json_output {
        info!("Writing JSON transcript to {:?}", path);
        MachineTranscript::from_turns(turns, &config.title, metadata).write_json(path)?;
        json_path = Some(path.to_path_buf());
    }

    Ok(RenderResult {
        markdown_path: markdown_output.to_path_buf(),
        json_path,
    })
}
