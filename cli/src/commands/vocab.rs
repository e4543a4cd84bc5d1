//! Vocab command implementation.

use clap::Parser;

/// Vocab command arguments.
#[derive(Parser)]
pub struct VocabCommand {
    /// Path to the word list (one word per line, ISO-8859-2)
    #[arg(short, long)]
    pub input: String,

    /// Minimum occurrence count for a word to be listed
    #[arg(short, long, default_value_t = 10)]
    pub min_count: u64,

    /// Print the vocabulary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use compact_str::CompactString;
use serde::Serialize;
use std::path::Path;
use wordclass_corpus::{count_words_parallel, read_word_list};

#[derive(Serialize)]
struct VocabEntry {
    word: CompactString,
    count: u64,
}

pub fn run(cmd: VocabCommand) -> AnyhowResult<()> {
    let input = Path::new(&cmd.input);
    let words = read_word_list(input)
        .with_context(|| format!("failed to read word list {}", input.display()))?;

    let mut entries: Vec<VocabEntry> = count_words_parallel(&words)
        .into_iter()
        .filter(|(_, count)| *count >= cmd.min_count)
        .map(|(word, count)| VocabEntry { word, count })
        .collect();

    // Most frequent first, ties broken alphabetically
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.word, entry.count);
        }
    }

    Ok(())
}
