//! Root word sources
//!
//! A `WordSource` supplies the root word for each new round.

use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;

/// Supplies root words for new rounds
pub trait WordSource {
    /// Next root word, or `None` if the source has nothing to offer
    fn next_root_word(&mut self) -> Option<String>;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn next_root_word(&mut self) -> Option<String> {
        (**self).next_root_word()
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn next_root_word(&mut self) -> Option<String> {
        (**self).next_root_word()
    }
}

/// Picks root words uniformly at random from a list
pub struct RandomSource<R = ThreadRng> {
    words: Vec<String>,
    rng: R,
}

impl RandomSource {
    /// Random source over `words` using the thread-local generator
    ///
    /// Blank entries are skipped and the rest are lowercased.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::with_rng(words, rand::rng())
    }
}

impl<R: Rng> RandomSource<R> {
    /// Random source over `words` drawing from `rng`
    pub fn with_rng<I, W>(words: I, rng: R) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { words, rng }
    }

    /// Words this source can draw from
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl<R: Rng> WordSource for RandomSource<R> {
    fn next_root_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}

/// Cycles through a fixed sequence of root words
///
/// Useful for replaying a known sequence of rounds.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    words: Vec<String>,
    next: usize,
}

impl FixedSource {
    /// Source yielding `words` in order, wrapping around at the end
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl WordSource for FixedSource {
    fn next_root_word(&mut self) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        let word = self.words[self.next % self.words.len()].clone();
        self.next = (self.next + 1) % self.words.len();
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_source_draws_from_list() {
        let mut source = RandomSource::with_rng(["silkworm", "baseball"], StdRng::seed_from_u64(7));

        for _ in 0..20 {
            let word = source.next_root_word().unwrap();
            assert!(word == "silkworm" || word == "baseball");
        }
    }

    #[test]
    fn random_source_skips_blank_lines() {
        let source = RandomSource::new(["", "  Silkworm ", "\t"]);
        assert_eq!(source.words(), ["silkworm".to_string()]);
    }

    #[test]
    fn empty_random_source_yields_none() {
        let mut source = RandomSource::new(Vec::<String>::new());
        assert_eq!(source.next_root_word(), None);
    }

    #[test]
    fn fixed_source_cycles() {
        let mut source = FixedSource::new(["apple", "silkworm"]);
        assert_eq!(source.next_root_word().as_deref(), Some("apple"));
        assert_eq!(source.next_root_word().as_deref(), Some("silkworm"));
        assert_eq!(source.next_root_word().as_deref(), Some("apple"));
    }

    #[test]
    fn empty_fixed_source_yields_none() {
        let mut source = FixedSource::default();
        assert_eq!(source.next_root_word(), None);
    }
}
