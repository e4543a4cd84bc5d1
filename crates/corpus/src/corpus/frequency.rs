//! Word frequency counting.
//!
//! Sequential and parallel counters over a word list, plus the
//! occurrence-threshold vocabulary filter built on top of them. The
//! parallel variant is a rayon fold/reduce and returns the same counts
//! as the sequential one.

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;
use std::hash::Hash;

/// Count occurrences of each word, sequentially.
pub fn count_words<W>(words: &[W]) -> AHashMap<W, u64>
where
    W: Clone + Eq + Hash,
{
    let mut counts = AHashMap::new();
    for word in words {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    counts
}

/// Count occurrences of each word across rayon worker threads.
pub fn count_words_parallel<W>(words: &[W]) -> AHashMap<W, u64>
where
    W: Clone + Eq + Hash + Send + Sync,
{
    words
        .par_iter()
        .fold(AHashMap::new, |mut counts, word| {
            *counts.entry(word.clone()).or_insert(0) += 1;
            counts
        })
        .reduce(AHashMap::new, |mut merged, counts| {
            for (word, count) in counts {
                *merged.entry(word).or_insert(0) += count;
            }
            merged
        })
}

/// Words occurring at least `threshold` times.
pub fn common_words<W>(words: &[W], threshold: u64) -> AHashSet<W>
where
    W: Clone + Eq + Hash,
{
    count_words(words)
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(word, _)| word)
        .collect()
}
