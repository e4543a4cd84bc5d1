//! Fixed-distance pair extraction.

use ahash::AHashSet;
use std::hash::Hash;

/// Ordered word pairs at a fixed token distance.
///
/// Distance 1 yields adjacent bigrams; a distance at or beyond the end
/// of the list yields nothing.
pub fn pairs<W: Clone>(words: &[W], distance: usize) -> impl Iterator<Item = (W, W)> + '_ {
    words
        .iter()
        .zip(words.iter().skip(distance))
        .map(|(word1, word2)| (word1.clone(), word2.clone()))
}

/// Keep only the pairs whose words are both in `vocabulary`.
pub fn filter_pairs_by_vocabulary<'a, W, I>(
    pairs: I,
    vocabulary: &'a AHashSet<W>,
) -> impl Iterator<Item = (W, W)> + 'a
where
    W: Eq + Hash + 'a,
    I: IntoIterator<Item = (W, W)>,
    I::IntoIter: 'a,
{
    pairs
        .into_iter()
        .filter(move |(word1, word2)| vocabulary.contains(word1) && vocabulary.contains(word2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_adjacent() {
        let bigrams: Vec<(i32, i32)> = pairs(&[1, 2, 3, 4], 1).collect();
        assert_eq!(bigrams, vec![(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_pairs_distance_two() {
        let skipgrams: Vec<(i32, i32)> = pairs(&[1, 2, 3, 4], 2).collect();
        assert_eq!(skipgrams, vec![(1, 3), (2, 4)]);
    }

    #[test]
    fn test_pairs_distance_beyond_list() {
        assert_eq!(pairs(&[1, 2, 3, 4], 10).count(), 0);
    }

    #[test]
    fn test_filter_pairs_by_vocabulary() {
        let bigrams = vec![(1, 2), (2, 3), (1, 3)];

        let all: AHashSet<i32> = [1, 2, 3, 4].into_iter().collect();
        let kept: Vec<(i32, i32)> =
            filter_pairs_by_vocabulary(bigrams.clone(), &all).collect();
        assert_eq!(kept, bigrams);

        let partial: AHashSet<i32> = [1, 3].into_iter().collect();
        let kept: Vec<(i32, i32)> =
            filter_pairs_by_vocabulary(bigrams.clone(), &partial).collect();
        assert_eq!(kept, vec![(1, 3)]);

        let single: AHashSet<i32> = [1].into_iter().collect();
        assert_eq!(filter_pairs_by_vocabulary(bigrams, &single).count(), 0);
    }
}
