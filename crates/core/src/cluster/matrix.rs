//! Sparse word-indexed co-occurrence matrix.
//!
//! This module provides the count store at the heart of greedy word-class
//! clustering: a 2D table keyed by words on both axes, with fast access
//! to the occupied part of any row or column.

use crate::cluster::Word;
use crate::error::{ClusterError, Result};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis selector for row/column oriented queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// First-axis (row) orientation
    Row,
    /// Second-axis (column) orientation
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

impl FromStr for Axis {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "row" => Ok(Axis::Row),
            "column" => Ok(Axis::Column),
            other => Err(ClusterError::InvalidAxis(other.to_string())),
        }
    }
}

/// Sparse 2D count table with word indexing on both axes.
///
/// Conceptually a partial function from `(word, word)` to a count, zero
/// elsewhere. Counts are stored twice, under a row-major and a
/// column-major index, so both orientations of sparse access are O(1)
/// hash lookups returning the live bucket. Every mutation updates both
/// indexes in lockstep; neither is ever derived from the other.
///
/// The matrix is not symmetric: `(a, b)` and `(b, a)` are distinct
/// cells unless the caller writes both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "W: Serialize + Eq + std::hash::Hash",
    deserialize = "W: Deserialize<'de> + Eq + std::hash::Hash"
))]
pub struct CoocMatrix<W> {
    /// first word -> (second word -> count)
    rows: AHashMap<W, AHashMap<W, u64>>,
    /// second word -> (first word -> count), transposed mirror of `rows`
    cols: AHashMap<W, AHashMap<W, u64>>,
}

impl<W: Word> CoocMatrix<W> {
    /// Create a new empty matrix.
    pub fn new() -> Self {
        Self {
            rows: AHashMap::new(),
            cols: AHashMap::new(),
        }
    }

    /// Create a new matrix with axis-key capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: AHashMap::with_capacity(capacity),
            cols: AHashMap::with_capacity(capacity),
        }
    }

    /// Build a matrix from a sequence of word pairs.
    ///
    /// Each pair increments its cell by one, so repeated pairs
    /// accumulate; the result depends only on the multiset of pairs,
    /// not their order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, W)>,
    {
        let mut matrix = Self::new();
        for (word1, word2) in pairs {
            matrix.increment(word1, word2);
        }
        matrix
    }

    /// Look up the count stored under `(a, b)`.
    ///
    /// Total over all pairs: a cell that was never written reads as 0.
    #[inline]
    pub fn get(&self, a: &W, b: &W) -> u64 {
        self.rows
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// Store `value` under `(a, b)`, overwriting any prior count.
    ///
    /// Creates the row and column buckets for `a`/`b` if absent.
    /// Writing 0 still materializes the cell.
    pub fn set(&mut self, a: W, b: W, value: u64) {
        self.rows
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), value);
        self.cols.entry(b).or_default().insert(a, value);
    }

    /// Count `(a, b)` once more, i.e. `set(a, b, get(a, b) + 1)`.
    #[inline]
    pub fn increment(&mut self, a: W, b: W) {
        self.add(a, b, 1);
    }

    /// Add `delta` to the count under `(a, b)`.
    pub fn add(&mut self, a: W, b: W, delta: u64) {
        let cell = self
            .rows
            .entry(a.clone())
            .or_default()
            .entry(b.clone())
            .or_insert(0);
        *cell += delta;
        let value = *cell;
        self.cols.entry(b).or_default().insert(a, value);
    }

    /// The live sparse row for `a`: every second-axis word holding a
    /// stored count against `a`.
    ///
    /// Unlike [`get`], asking for the row of a key that has never been
    /// observed on the first axis is an error, not an empty answer: it
    /// signals a word the driver has not actually counted.
    ///
    /// [`get`]: CoocMatrix::get
    pub fn row(&self, a: &W) -> Result<&AHashMap<W, u64>> {
        self.rows
            .get(a)
            .ok_or_else(|| ClusterError::key_not_found(Axis::Row, a))
    }

    /// The live sparse column for `b`: every first-axis word holding a
    /// stored count against `b`.
    ///
    /// Same never-observed-key behavior as [`row`](CoocMatrix::row).
    pub fn column(&self, b: &W) -> Result<&AHashMap<W, u64>> {
        self.cols
            .get(b)
            .ok_or_else(|| ClusterError::key_not_found(Axis::Column, b))
    }

    /// Whether `a` has ever been observed on the first axis.
    #[inline]
    pub fn has_row(&self, a: &W) -> bool {
        self.rows.contains_key(a)
    }

    /// Whether `b` has ever been observed on the second axis.
    #[inline]
    pub fn has_column(&self, b: &W) -> bool {
        self.cols.contains_key(b)
    }

    /// Set union of the occupied keys of two rows (or two columns).
    ///
    /// This is the query a clustering driver uses to find the minimal
    /// set of cells affected by a hypothetical merge of `key1` and
    /// `key2`. A key never observed on the axis contributes an empty
    /// set rather than failing, so the union is total over word pairs.
    pub fn union_keys<'a>(&'a self, key1: &W, key2: &W, axis: Axis) -> AHashSet<&'a W> {
        let index = match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.cols,
        };

        let mut keys = AHashSet::new();
        for key in [key1, key2] {
            if let Some(bucket) = index.get(key) {
                keys.extend(bucket.keys());
            }
        }
        keys
    }

    /// Iterator over every stored count, in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.values().flat_map(|row| row.values().copied())
    }

    /// Iterator over every stored `(first, second)` key pair, in
    /// row-major traversal order (hash order within, so not stable
    /// across runs).
    pub fn keys(&self) -> impl Iterator<Item = (&W, &W)> {
        self.rows
            .iter()
            .flat_map(|(word1, row)| row.keys().map(move |word2| (word1, word2)))
    }

    /// Words observed on the first axis.
    pub fn row_keys(&self) -> impl Iterator<Item = &W> {
        self.rows.keys()
    }

    /// Words observed on the second axis.
    pub fn column_keys(&self) -> impl Iterator<Item = &W> {
        self.cols.keys()
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    /// Check whether no cell has been materialized.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults_to_zero() {
        let matrix: CoocMatrix<&str> = CoocMatrix::new();
        assert_eq!(matrix.get(&"a", &"b"), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = CoocMatrix::new();
        matrix.set("a", "b", 3);

        assert_eq!(matrix.get(&"a", &"b"), 3);
        // Transposed cell is a distinct entry
        assert_eq!(matrix.get(&"b", &"a"), 0);

        matrix.set("a", "b", 1);
        assert_eq!(matrix.get(&"a", &"b"), 1);
    }

    #[test]
    fn test_set_zero_materializes_cell() {
        let mut matrix = CoocMatrix::new();
        matrix.set("a", "b", 0);

        assert_eq!(matrix.get(&"a", &"b"), 0);
        assert_eq!(matrix.len(), 1);
        assert!(matrix.has_row(&"a"));
        assert!(matrix.has_column(&"b"));
    }

    #[test]
    fn test_from_pairs_counts_multiplicity() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2), (2, 3), (1, 2), (1, 3)]);

        assert_eq!(matrix.get(&1, &2), 2);
        assert_eq!(matrix.get(&2, &3), 1);
        assert_eq!(matrix.get(&1, &3), 1);
        assert_eq!(matrix.get(&3, &1), 0);
        assert_eq!(matrix.len(), 3);
    }

    #[test]
    fn test_row_and_column_agree_with_get() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2), (1, 3), (2, 3), (1, 2)]);

        let row = matrix.row(&1).unwrap();
        assert_eq!(row.len(), 2);
        for (word2, &count) in row {
            assert_eq!(count, matrix.get(&1, word2));
        }

        let column = matrix.column(&3).unwrap();
        assert_eq!(column.len(), 2);
        for (word1, &count) in column {
            assert_eq!(count, matrix.get(word1, &3));
        }
    }

    #[test]
    fn test_row_unknown_key_fails() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2)]);

        // 2 was only ever a second-axis word
        assert!(matches!(
            matrix.row(&2),
            Err(ClusterError::KeyNotFound { axis: Axis::Row, .. })
        ));
        assert!(matches!(
            matrix.column(&1),
            Err(ClusterError::KeyNotFound {
                axis: Axis::Column,
                ..
            })
        ));
    }

    #[test]
    fn test_union_keys_rows() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2), (1, 3), (4, 3), (4, 5)]);

        let union = matrix.union_keys(&1, &4, Axis::Row);
        let expected: AHashSet<&i32> = [&2, &3, &5].into_iter().collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_union_keys_columns() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2), (3, 2), (4, 5)]);

        let union = matrix.union_keys(&2, &5, Axis::Column);
        let expected: AHashSet<&i32> = [&1, &3, &4].into_iter().collect();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_union_keys_missing_key_is_empty() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2)]);

        let union = matrix.union_keys(&1, &99, Axis::Row);
        let expected: AHashSet<&i32> = [&2].into_iter().collect();
        assert_eq!(union, expected);

        assert!(matrix.union_keys(&98, &99, Axis::Row).is_empty());
    }

    #[test]
    fn test_values_and_keys() {
        let matrix = CoocMatrix::from_pairs(vec![(1, 2), (1, 2), (2, 3)]);

        let mut values: Vec<u64> = matrix.values().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2]);

        let mut keys: Vec<(i32, i32)> = matrix.keys().map(|(a, b)| (*a, *b)).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_add_keeps_indexes_in_lockstep() {
        let mut matrix = CoocMatrix::new();
        matrix.add("a", "b", 2);
        matrix.add("a", "b", 3);

        assert_eq!(matrix.get(&"a", &"b"), 5);
        assert_eq!(matrix.row(&"a").unwrap()[&"b"], 5);
        assert_eq!(matrix.column(&"b").unwrap()[&"a"], 5);
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("row".parse::<Axis>().unwrap(), Axis::Row);
        assert_eq!("column".parse::<Axis>().unwrap(), Axis::Column);
        assert!(matches!(
            "diagonal".parse::<Axis>(),
            Err(ClusterError::InvalidAxis(_))
        ));
    }
}
