//! Solutions command
//!
//! Lists every dictionary word a fresh round on a given root would accept.

use crate::core::{GameConfig, RoundEngine, normalize};
use crate::dictionary::{Dictionary, WordSet};
use rayon::prelude::*;

/// Every acceptable word for a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionsResult {
    pub root: String,
    /// Sorted by length, then alphabetically
    pub words: Vec<String>,
    /// Round score if every word were found
    pub max_score: usize,
}

impl SolutionsResult {
    /// Number of acceptable words
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Longest acceptable word, if any
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

/// Find all words in `dictionary` that a new round on `root` would accept
///
/// The dictionary is scanned in parallel. Words are checked with the same
/// rules as `RoundEngine::submit`, against the configured language.
#[must_use]
pub fn find_solutions(root: &str, dictionary: &WordSet, config: &GameConfig) -> SolutionsResult {
    let mut engine = RoundEngine::with_config(dictionary, config.clone());
    engine.start_round(Some(root));

    let mut words: Vec<String> = engine
        .dictionary()
        .iter()
        .collect::<Vec<_>>()
        .par_iter()
        .filter(|&&word| engine.validate(word).is_ok())
        .map(|&word| word.to_string())
        .collect();

    words.sort_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|w| w.chars().count()).sum();

    tracing::debug!(root = %engine.root_word(), count = words.len(), max_score, "solutions found");

    SolutionsResult {
        root: engine.root_word().to_string(),
        words,
        max_score,
    }
}

/// Whether `root` is a recognized word in the configured language
#[must_use]
pub fn is_known_root<D: Dictionary>(root: &str, dictionary: &D, config: &GameConfig) -> bool {
    dictionary.is_recognized(&normalize(root), &config.language)
}
