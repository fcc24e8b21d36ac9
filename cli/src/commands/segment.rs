//! Segment command implementation.

use clap::Parser;

/// Segment command arguments.
#[derive(Parser)]
pub struct SegmentCommand {
    /// Dictionary to segment with
    pub dict: String,

    /// Text to segment ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Print only the preferred replacement text
    #[arg(short, long, default_value_t = false)]
    pub replace: bool,
}

use anyhow::Result as AnyhowResult;
use dictum::{Segment, SegmentStats, Segmenter};
use std::path::Path;

pub fn run(cmd: SegmentCommand) -> AnyhowResult<()> {
    let lexicon = super::load_lexicon(Path::new(&cmd.dict), false)?;
    let text = super::read_input(&cmd.input)?;

    let segments = Segmenter::new(&lexicon).segment(&text)?;

    if cmd.replace {
        let output: String = segments.iter().map(Segment::replacement).collect();
        print!("{}", output);
    } else {
        for segment in &segments {
            match segment {
                Segment::Matched { entry, .. } => println!("{}", super::format_entry(entry)),
                Segment::Unmatched(text) => println!("{:?}", text),
            }
        }
    }

    let stats = SegmentStats::from_segments(&segments);
    tracing::debug!(
        matched = stats.matched_segments,
        unmatched = stats.unmatched_segments,
        coverage = stats.coverage(),
        "segmentation done"
    );

    Ok(())
}
