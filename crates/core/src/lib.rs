//! Wordclass-core - Clustering data structure primitives
//!
//! This crate provides the two data structures that make greedy,
//! mutual-information-driven word-class induction tractable at scale:
//!
//! - [`CoocMatrix`]: a sparse word-indexed co-occurrence count table
//!   with fast access to the occupied part of any row or column
//! - [`ClassPartition`]: a dynamic partition of the vocabulary into
//!   classes supporting O(1) lookup and in-place class merges
//!
//! Choosing which classes to merge next (and when to stop) is the
//! caller's business; this crate only exposes the primitives such a
//! clustering driver needs.
//!
//! # Example
//!
//! ```rust
//! use wordclass_core::{ClassPartition, CoocMatrix};
//!
//! // Count bigrams into a sparse matrix
//! let matrix = CoocMatrix::from_pairs(vec![("the", "cat"), ("the", "dog")]);
//! assert_eq!(matrix.get(&"the", &"cat"), 1);
//! assert_eq!(matrix.get(&"cat", &"the"), 0);
//!
//! // Start with singleton classes, then merge
//! let mut classes = ClassPartition::new(vec!["the", "cat", "dog"]);
//! classes.merge(&"cat", &"dog")?;
//! assert_eq!(classes.representative_of(&"dog"), &"cat");
//! # Ok::<(), wordclass_core::ClusterError>(())
//! ```

pub mod error;
pub use error::{ClusterError, Result};

// Clustering data structures
pub mod cluster;
pub use cluster::{Axis, ClassPartition, CoocMatrix, Word};
