//! Export command implementation.

use clap::Parser;

/// Export command arguments.
#[derive(Parser)]
pub struct ExportCommand {
    /// Dictionary to read
    pub input: String,

    /// Output file
    #[arg(short, long)]
    pub output: String,

    /// Input format (guessed from the extension if not specified)
    #[arg(long)]
    pub from: Option<DictFormat>,

    /// Output format (guessed from the extension if not specified)
    #[arg(long)]
    pub to: Option<DictFormat>,
}

use anyhow::{Context, Result as AnyhowResult};
use dictum::{DictFormat, DictLoader, DictSaver};
use std::path::Path;

pub fn run(cmd: ExportCommand) -> AnyhowResult<()> {
    let input = Path::new(&cmd.input);
    let output = Path::new(&cmd.output);

    let from = cmd.from.unwrap_or_else(|| DictFormat::from_path(input));
    let to = cmd.to.unwrap_or_else(|| DictFormat::from_path(output));

    let lexicon = DictLoader::builder()
        .format(from)
        .build()
        .load(input)
        .with_context(|| format!("Failed to load dictionary {}", input.display()))?
        .freeze();

    DictSaver::new(&lexicon)
        .format(to)
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!(
        "Exported {} entries ({} -> {}) to {}",
        lexicon.iter().len(),
        from,
        to,
        output.display()
    );
    Ok(())
}
