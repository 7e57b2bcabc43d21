use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use vtt_reducer::stages::DEFAULT_TITLE;
use vtt_reducer::{
    RenderConfig, TranscriptMetadata, consolidate, default_output_path, execute_render,
    parse_vtt_file, summarize_speakers,
};

#[derive(Parser)]
#[command(name = "vtt-reducer")]
#[command(author, version, about = "Reduce WebVTT captions to a readable Markdown transcript", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consolidate a WebVTT file into one Markdown line per speaker turn
    Reduce {
        /// Input WebVTT file
        input: PathBuf,

        /// Output Markdown file (defaults to <input>_reduced.md)
        output: Option<PathBuf>,

        /// Also write a machine-readable JSON transcript
        #[arg(long)]
        json: Option<PathBuf>,

        /// Heading for the transcript
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print cue and speaker statistics without writing anything
    Analyze {
        /// Input WebVTT file
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reduce {
            input,
            output,
            json,
            title,
            verbose,
        } => {
            setup_logging(verbose);
            reduce_transcript(input, output, json, title)
        }
        Commands::Analyze { input, verbose } => {
            setup_logging(verbose);
            analyze_transcript(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn reduce_transcript(
    input: PathBuf,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
    title: String,
) -> Result<()> {
    let output = output.unwrap_or_else(|| default_output_path(&input));

    info!("Reading VTT file: {:?}", input);
    let parsed = parse_vtt_file(&input).context("Failed to load input transcript")?;
    info!(
        "Parsed {} cues ({} blocks skipped)",
        parsed.cues.len(),
        parsed.blocks_skipped
    );

    let turns = consolidate(&parsed.cues);
    info!("Consolidated to {} speaker turns", turns.len());

    let metadata =
        TranscriptMetadata::from_turns(&turns, parsed.cues.len(), parsed.blocks_skipped);
    let config = RenderConfig { title };
    let result = execute_render(&turns, metadata, &output, json.as_deref(), &config)
        .context("Failed to write reduced transcript")?;

    info!("Reduced transcript saved to {:?}", result.markdown_path);
    if let Some(json_path) = result.json_path {
        info!("JSON transcript saved to {:?}", json_path);
    }

    Ok(())
}

fn analyze_transcript(input: PathBuf) -> Result<()> {
    info!("Analyzing transcript from {:?}", input);
    let parsed = parse_vtt_file(&input).context("Failed to load input transcript")?;
    let turns = consolidate(&parsed.cues);

    println!("Transcript Analysis");
    println!("===================");
    println!("Blocks seen: {}", parsed.blocks_seen);
    println!("Blocks skipped: {}", parsed.blocks_skipped);
    println!("Total cues: {}", parsed.cues.len());
    println!("Total turns: {}", turns.len());
    if let (Some(first), Some(last)) = (parsed.cues.first(), parsed.cues.last()) {
        println!("Span: {} to {}", first.start, last.start);
    }
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    for stats in summarize_speakers(&turns) {
        println!(
            "{}: {} turns, {} cues, {} words, first at {}",
            stats.speaker,
            stats.turns,
            stats.cues,
            stats.words,
            stats.first_seen.whole_seconds()
        );
    }

    Ok(())
}
