//! Dictionary oracle
//!
//! The round engine asks a `Dictionary` whether a word is real. How the answer is
//! produced (spell checker, network service, word list) is up to the implementor.

use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;

/// Language code of the embedded word list
pub const ENGLISH: &str = "en";

/// Answers "is this a recognized word in language X"
pub trait Dictionary {
    /// Whether `word` is a recognized word in `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

/// In-memory word set for a single language
///
/// Words are stored lowercased. Lookups in any other language return `false`.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    language: String,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Create a word set for `language` from a list of words
    ///
    /// Blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordSet};
    ///
    /// let words = WordSet::new("en", ["silk", "worm"]);
    /// assert!(words.is_recognized("silk", "en"));
    /// assert!(!words.is_recognized("silk", "fr"));
    /// ```
    pub fn new<I, W>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// English word set compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ENGLISH, DICTIONARY)
    }

    /// Language this set answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of words in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordSet {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(&word.to_lowercase())
    }
}
