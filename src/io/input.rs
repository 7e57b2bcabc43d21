use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::stages::{ParseResult, parse_vtt};

/// Suffix appended to the input's stem when no output path is given
pub const REDUCED_SUFFIX: &str = "_reduced.md";

/// Read a WebVTT file and parse it into cues
pub fn parse_vtt_file(path: &Path) -> Result<ParseResult> {
    let content = read_vtt_file(path)?;
    Ok(parse_vtt(&content))
}

/// Read a WebVTT file as UTF-8 text
pub fn read_vtt_file(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("Input file not found: {:?}", path);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// `<dir>/<stem>_reduced.md` next to the input file
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcript".to_string());
    let file_name = format!("{}{}", stem, REDUCED_SUFFIX);

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}
