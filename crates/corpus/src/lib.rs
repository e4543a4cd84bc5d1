//! Wordclass-corpus - Corpus ingestion utilities
//!
//! This crate turns raw corpus files into the inputs the clustering
//! core consumes: word lists, tagged sentences, fixed-distance word
//! pairs, and frequency-filtered vocabularies.
//!
//! # Example
//!
//! ```rust
//! use wordclass_corpus::{common_words, filter_pairs_by_vocabulary, pairs};
//!
//! let words = vec![1, 1, 1, 2, 2, 3];
//! let vocabulary = common_words(&words, 2);
//!
//! let bigrams: Vec<(i32, i32)> =
//!     filter_pairs_by_vocabulary(pairs(&words, 1), &vocabulary).collect();
//! assert_eq!(bigrams, vec![(1, 1), (1, 1), (1, 2), (2, 2)]);
//! ```

pub mod error;
pub use error::{CorpusError, Result};

// Ingestion utilities
pub mod corpus;
pub use corpus::{
    common_words, count_words, count_words_parallel, filter_pairs_by_vocabulary, pairs,
    read_tagged_corpus, read_word_list, TaggedToken,
};
