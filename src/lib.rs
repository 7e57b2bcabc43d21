pub mod io;
pub mod models;
pub mod stages;

pub use io::{
    MachineTranscript, MarkdownTranscript, TranscriptMetadata, default_output_path,
    parse_vtt_file, read_vtt_file,
};
pub use models::{Cue, Timestamp, TimestampError, Turn};
pub use stages::{
    ParseResult, RenderConfig, SkipReason, SpeakerStats, consolidate, execute_render, parse_cues,
    parse_vtt, render, render_with_config, summarize_speakers,
};
