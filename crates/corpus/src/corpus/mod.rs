//! Corpus ingestion pipeline.
//!
//! File readers, pair extraction and frequency counting, kept separate
//! from the clustering core: everything here is plain iteration and
//! I/O producing word values the core treats as opaque.

pub mod frequency;
pub mod pairs;
pub mod reader;

pub use frequency::{common_words, count_words, count_words_parallel};
pub use pairs::{filter_pairs_by_vocabulary, pairs};
pub use reader::{read_tagged_corpus, read_word_list, TaggedToken};
