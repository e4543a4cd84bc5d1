//! Stats command implementation.

use clap::Parser;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    /// Path to the word list (one word per line, ISO-8859-2)
    #[arg(short, long)]
    pub input: String,

    /// Token distance between the words of a pair
    #[arg(short, long, default_value_t = 1)]
    pub distance: usize,

    /// Minimum occurrence count for a word to enter the vocabulary
    #[arg(short, long, default_value_t = 10)]
    pub min_count: u64,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use ahash::AHashSet;
use anyhow::{Context, Result as AnyhowResult};
use compact_str::CompactString;
use serde::Serialize;
use std::path::Path;
use wordclass_core::CoocMatrix;
use wordclass_corpus::{count_words_parallel, filter_pairs_by_vocabulary, pairs, read_word_list};

#[derive(Serialize)]
struct StatsSummary {
    tokens: usize,
    distinct_words: usize,
    vocabulary_size: usize,
    distinct_pairs: usize,
    total_pair_count: u64,
}

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let input = Path::new(&cmd.input);
    let words = read_word_list(input)
        .with_context(|| format!("failed to read word list {}", input.display()))?;

    let counts = count_words_parallel(&words);
    let vocabulary: AHashSet<CompactString> = counts
        .iter()
        .filter(|(_, &count)| count >= cmd.min_count)
        .map(|(word, _)| word.clone())
        .collect();

    let matrix = CoocMatrix::from_pairs(filter_pairs_by_vocabulary(
        pairs(&words, cmd.distance),
        &vocabulary,
    ));

    let summary = StatsSummary {
        tokens: words.len(),
        distinct_words: counts.len(),
        vocabulary_size: vocabulary.len(),
        distinct_pairs: matrix.len(),
        total_pair_count: matrix.values().sum(),
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Tokens:           {}", summary.tokens);
        println!("Distinct words:   {}", summary.distinct_words);
        println!("Vocabulary size:  {}", summary.vocabulary_size);
        println!("Distinct pairs:   {}", summary.distinct_pairs);
        println!("Total pair count: {}", summary.total_pair_count);
    }

    Ok(())
}
