//! Reasons a submitted word is turned down

use thiserror::Error;

/// Why a candidate word was not accepted
///
/// Variants are listed in the order the rules are checked. When a word breaks
/// several rules, only the first one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// The word was already accepted this round
    #[error("word used already")]
    Duplicate,

    /// The word needs letters the root word does not have
    #[error("word not possible")]
    NotComposable,

    /// The dictionary does not recognize the word
    #[error("word not recognized")]
    NotAWord,

    /// The word has fewer than three letters
    #[error("too short")]
    TooShort,

    /// The word is the root word itself
    #[error("same as starting")]
    SameAsRoot,
}

impl Rejection {
    /// All rejection reasons, in rule order
    pub const ALL: [Self; 5] = [
        Self::Duplicate,
        Self::NotComposable,
        Self::NotAWord,
        Self::TooShort,
        Self::SameAsRoot,
    ];

    /// Short heading shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Duplicate => "word used already",
            Self::NotComposable => "word not possible",
            Self::NotAWord => "word not recognized",
            Self::TooShort => "too short",
            Self::SameAsRoot => "same as starting",
        }
    }

    /// Longer explanation for the player
    #[must_use]
    pub fn message(self, word: &str, root: &str) -> String {
        match self {
            Self::Duplicate => "be more original".to_string(),
            Self::NotComposable => format!("you can't spell {word} from {root}"),
            Self::NotAWord => "you can't just make them up".to_string(),
            Self::TooShort => "word must be longer than 2 letters".to_string(),
            Self::SameAsRoot => "words must be different from starting word".to_string(),
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Duplicate => "duplicate",
            Self::NotComposable => "not-composable",
            Self::NotAWord => "not-a-word",
            Self::TooShort => "too-short",
            Self::SameAsRoot => "same-as-root",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_title() {
        for rejection in Rejection::ALL {
            assert_eq!(rejection.to_string(), rejection.title());
        }
    }

    #[test]
    fn not_composable_message_names_both_words() {
        let message = Rejection::NotComposable.message("silkworms", "silkworm");
        assert_eq!(message, "you can't spell silkworms from silkworm");
    }

    #[test]
    fn codes_are_unique() {
        let codes: rustc_hash::FxHashSet<_> = Rejection::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), Rejection::ALL.len());
    }
}
