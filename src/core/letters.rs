//! Letter pool for a root word
//!
//! A `LetterPool` is the multiset of characters in a root word. A candidate can be
//! spelled from the pool when every character it uses is available at least as
//! many times as the candidate needs it.

use rustc_hash::FxHashMap;

/// Multiset of the characters in a root word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterPool {
    /// Build the pool for a word
    ///
    /// Characters are taken as-is; callers normalize case beforehand.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("milk"));
    /// assert!(!pool.can_spell("silkworms"));
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Walks the candidate and consumes one matching occurrence per character.
    /// Fails as soon as a character has no occurrence left.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Number of occurrences of `ch` in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of characters in the pool
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the pool holds no characters
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counts_repeated_letters() {
        let pool = LetterPool::new("baseball");
        assert_eq!(pool.len(), 8);
        assert_eq!(pool.count_of('b'), 2);
        assert_eq!(pool.count_of('a'), 2);
        assert_eq!(pool.count_of('l'), 2);
        assert_eq!(pool.count_of('s'), 1);
        assert_eq!(pool.count_of('z'), 0);
    }

    #[test]
    fn spells_subsets() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("silkworm"));
        assert!(pool.can_spell(""));
    }

    #[test]
    fn rejects_extra_occurrences() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("silkworms")); // only one 's'
        assert!(!pool.can_spell("mill")); // only one 'l'
    }

    #[test]
    fn rejects_missing_letters() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("milky"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("SILK"));
    }

    #[test]
    fn handles_non_ascii() {
        let pool = LetterPool::new("crème");
        assert!(pool.can_spell("mère"));
        assert!(!pool.can_spell("mere")); // 'e' appears once besides 'è'
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::new("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }

    fn multiset(word: &str) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn can_spell_matches_multiset_inclusion(root in "[a-f]{0,10}", word in "[a-f]{0,10}") {
            let root_counts = multiset(&root);
            let expected = multiset(&word)
                .iter()
                .all(|(ch, n)| root_counts.get(ch).copied().unwrap_or(0) >= *n);

            prop_assert_eq!(LetterPool::new(&root).can_spell(&word), expected);
        }

        #[test]
        fn any_permutation_of_root_is_spellable(root in "[a-z]{1,12}", seed in any::<u64>()) {
            let mut chars: Vec<char> = root.chars().collect();
            // Rotate by a seed-derived offset to get a rearrangement
            let offset = (seed as usize) % chars.len();
            chars.rotate_left(offset);
            let rearranged: String = chars.into_iter().collect();

            prop_assert!(LetterPool::new(&root).can_spell(&rearranged));
        }
    }
}
