//! Check command
//!
//! Plays a list of words against one root non-interactively.

use crate::core::{Rejection, RoundEngine, Scores};
use crate::dictionary::Dictionary;

/// Outcome of one submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub input: String,
    pub outcome: Result<Option<Scores>, Rejection>,
}

impl CheckEntry {
    /// Whether the word was accepted
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self.outcome, Ok(Some(_)))
    }
}

/// Result of checking a list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub root: String,
    pub entries: Vec<CheckEntry>,
    pub scores: Scores,
}

impl CheckReport {
    /// Number of accepted words
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.entries.iter().filter(|e| e.accepted()).count()
    }

    /// Number of rejected words
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_err()).count()
    }
}

/// Submit each word in order to `engine` and record the outcomes
pub fn check_words<D, I, W>(engine: &mut RoundEngine<D>, words: I) -> CheckReport
where
    D: Dictionary,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let entries = words
        .into_iter()
        .map(|word| {
            let input = word.as_ref().to_string();
            let outcome = engine.submit(&input);
            CheckEntry { input, outcome }
        })
        .collect();

    CheckReport {
        root: engine.root_word().to_string(),
        entries,
        scores: engine.scores(),
    }
}
