//! Lookup command implementation.

use clap::Parser;

/// Lookup command arguments.
#[derive(Parser)]
pub struct LookupCommand {
    /// Dictionary to query
    pub dict: String,

    /// Word whose prefixes are looked up
    pub word: String,

    /// Print every matching prefix, longest first
    #[arg(short, long, default_value_t = false)]
    pub all: bool,
}

use anyhow::Result as AnyhowResult;
use dictum::Dict;
use std::path::Path;

pub fn run(cmd: LookupCommand) -> AnyhowResult<()> {
    let lexicon = super::load_lexicon(Path::new(&cmd.dict), false)?;

    let matches = if cmd.all {
        lexicon.match_all_prefixes(cmd.word.as_bytes())?
    } else {
        lexicon.match_prefix(cmd.word.as_bytes())?.into_iter().collect()
    };

    if matches.is_empty() {
        eprintln!("No match for {}", cmd.word);
    }
    for entry in matches {
        println!("{}", super::format_entry(entry));
    }

    Ok(())
}
