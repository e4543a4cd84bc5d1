//! Dynamic word-class partition.
//!
//! This module maintains the word -> class mapping a greedy clustering
//! driver mutates as it merges classes. Each class is labelled by one
//! of its member words acting as representative.

use crate::cluster::Word;
use crate::error::{ClusterError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A partition of a word universe into classes, each labelled by one of
/// its member words.
///
/// The partition starts as all-singletons and only ever coarsens:
/// [`merge`] folds one class into another and there is no split or
/// undo. Lookup is O(1); a merge touches only the members of the class
/// being absorbed, never the full universe.
///
/// [`merge`]: ClassPartition::merge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "W: Serialize + Eq + std::hash::Hash",
    deserialize = "W: Deserialize<'de> + Eq + std::hash::Hash"
))]
pub struct ClassPartition<W> {
    /// word -> current representative label
    reps: AHashMap<W, W>,
    /// representative label -> words currently in the class
    members: AHashMap<W, Vec<W>>,
}

impl<W: Word> ClassPartition<W> {
    /// Initialize singleton classes, one per distinct word.
    ///
    /// Duplicate words in the input collapse to a single entry, since
    /// the partition keys on word equality.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
    {
        let mut reps = AHashMap::new();
        let mut members = AHashMap::new();

        for word in words {
            if reps.contains_key(&word) {
                continue;
            }
            reps.insert(word.clone(), word.clone());
            members.insert(word.clone(), vec![word]);
        }

        Self { reps, members }
    }

    /// Number of words in the universe.
    pub fn len(&self) -> usize {
        self.reps.len()
    }

    /// Check whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.reps.is_empty()
    }

    /// Number of currently distinct classes.
    pub fn num_classes(&self) -> usize {
        self.members.len()
    }

    /// The current distinct class labels, in unspecified order.
    pub fn unique_classes(&self) -> impl Iterator<Item = &W> {
        self.members.keys()
    }

    /// Whether `word` belongs to the partition's universe.
    #[inline]
    pub fn contains(&self, word: &W) -> bool {
        self.reps.contains_key(word)
    }

    /// The class label `word` currently belongs to.
    ///
    /// A word outside the universe passes through unchanged: the caller
    /// gets the word itself back, not an error.
    #[inline]
    pub fn representative_of<'a>(&'a self, word: &'a W) -> &'a W {
        self.reps.get(word).unwrap_or(word)
    }

    /// [`representative_of`] applied to both words of a pair.
    ///
    /// [`representative_of`]: ClassPartition::representative_of
    pub fn representative_of_pair<'a>(&'a self, word1: &'a W, word2: &'a W) -> (&'a W, &'a W) {
        (self.representative_of(word1), self.representative_of(word2))
    }

    /// Fold the class labelled `class2` into the class labelled `class1`.
    ///
    /// Every word whose representative was `class2` now reports
    /// `class1`, and `class2` disappears from [`unique_classes`]. Both
    /// arguments must be current representative labels and must differ;
    /// a label that has itself been merged away is rejected.
    ///
    /// Runs in time proportional to the size of the absorbed class.
    ///
    /// [`unique_classes`]: ClassPartition::unique_classes
    pub fn merge(&mut self, class1: &W, class2: &W) -> Result<()> {
        if class1 == class2 {
            return Err(ClusterError::self_merge(class1));
        }
        if !self.members.contains_key(class1) {
            return Err(ClusterError::invalid_merge_target(class1));
        }

        let absorbed = self
            .members
            .remove(class2)
            .ok_or_else(|| ClusterError::invalid_merge_target(class2))?;

        for word in &absorbed {
            self.reps.insert(word.clone(), class1.clone());
        }
        if let Some(class) = self.members.get_mut(class1) {
            class.extend(absorbed);
        }

        Ok(())
    }

    /// The universe grouped by current representative.
    ///
    /// Every word appears in exactly one group; the group keyed by a
    /// label always contains the label itself.
    pub fn class_members(&self) -> &AHashMap<W, Vec<W>> {
        &self.members
    }

    /// The words currently mapped to `label`, if `label` is a live
    /// representative.
    pub fn members_of(&self, label: &W) -> Option<&[W]> {
        self.members.get(label).map(|class| class.as_slice())
    }
}
