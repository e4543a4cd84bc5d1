//! Clustering data structures.
//!
//! This module contains the sparse co-occurrence matrix and the class
//! partition consumed by a greedy clustering driver. The two structures
//! are independent of each other; the driver relates them by using the
//! same word values as matrix axis keys and partition members.

pub mod matrix;
pub mod partition;

pub use matrix::{Axis, CoocMatrix};
pub use partition::ClassPartition;

use std::fmt::Debug;
use std::hash::Hash;

/// Opaque word value stored in the clustering structures.
///
/// The core never interprets word contents (encoding, tagging, casing);
/// anything cloneable, hashable and debug-printable qualifies. The
/// `Debug` bound exists only so errors can name the offending key.
pub trait Word: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Word for T {}
