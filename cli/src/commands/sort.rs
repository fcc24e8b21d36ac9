//! Sort command implementation.

use clap::Parser;

/// Sort command arguments.
#[derive(Parser)]
pub struct SortCommand {
    /// Dictionary to read
    pub input: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Keep the first entry for repeated keys instead of failing
    #[arg(long, default_value_t = false)]
    pub keep_first: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use dictum::DictSaver;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn run(cmd: SortCommand) -> AnyhowResult<()> {
    let lexicon = super::load_lexicon(Path::new(&cmd.input), cmd.keep_first)?;
    let saver = DictSaver::new(&lexicon);

    match &cmd.output {
        Some(path) => {
            saver
                .save(Path::new(path))
                .with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Wrote {} entries to {}", lexicon.iter().len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            saver.write_to(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
