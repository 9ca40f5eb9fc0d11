//! Round engine
//!
//! Holds the root word for the current round, the words accepted so far and the
//! running scores. Candidates are checked against the rules in a fixed order and
//! the first failing rule is reported.

use super::letters::LetterPool;
use super::rejection::Rejection;
use crate::dictionary::{Dictionary, ENGLISH};
use crate::source::WordSource;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Root word used when no other root word is available
pub const DEFAULT_ROOT: &str = "silkworm";

/// Minimum number of letters in an accepted word
pub const MIN_WORD_LEN: usize = 3;

/// Settings for a round engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Language passed to the dictionary
    pub language: String,
    /// Root word used when a round is started without one
    pub fallback_root: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: ENGLISH.to_string(),
            fallback_root: DEFAULT_ROOT.to_string(),
        }
    }
}

/// Round and session scores after an accepted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    /// Total letters accepted this round
    pub round: usize,
    /// Total letters accepted since the engine was created
    pub session: usize,
}

/// Trim surrounding whitespace and lowercase
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validates submissions against the current root word and keeps score
pub struct RoundEngine<D> {
    dictionary: D,
    config: GameConfig,
    root: String,
    pool: LetterPool,
    used: Vec<String>,
    seen: FxHashSet<String>,
    scores: Scores,
}

impl<D: Dictionary> RoundEngine<D> {
    /// Create an engine with default settings and start a round on `root`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RoundEngine;
    /// use word_scramble::dictionary::WordSet;
    ///
    /// let mut engine = RoundEngine::new(WordSet::new("en", ["silk"]), "silkworm");
    /// let scores = engine.submit("silk").unwrap().unwrap();
    /// assert_eq!(scores.round, 4);
    /// ```
    pub fn new(dictionary: D, root: &str) -> Self {
        let mut engine = Self::with_config(dictionary, GameConfig::default());
        engine.start_round(Some(root));
        engine
    }

    /// Create an engine whose first round uses the configured fallback root
    pub fn with_config(dictionary: D, config: GameConfig) -> Self {
        let root = fallback_root(&config);

        Self {
            dictionary,
            pool: LetterPool::new(&root),
            root,
            config,
            used: Vec::new(),
            seen: FxHashSet::default(),
            scores: Scores::default(),
        }
    }

    /// Submit a candidate word
    ///
    /// The input is trimmed and lowercased first. Blank input is ignored and
    /// returns `Ok(None)`. On acceptance the word is prepended to the used words
    /// and its length is added to both scores.
    ///
    /// # Errors
    ///
    /// Returns the first rule the word breaks. State is left untouched.
    pub fn submit(&mut self, candidate: &str) -> Result<Option<Scores>, Rejection> {
        let word = normalize(candidate);
        if word.is_empty() {
            return Ok(None);
        }

        if let Err(rejection) = self.validate(&word) {
            debug!(word = %word, root = %self.root, reason = rejection.code(), "word rejected");
            return Err(rejection);
        }

        let len = word.chars().count();
        self.seen.insert(word.clone());
        self.used.insert(0, word);
        self.scores.round += len;
        self.scores.session += len;

        debug!(
            word = %self.used[0],
            round_score = self.scores.round,
            session_score = self.scores.session,
            "word accepted"
        );

        Ok(Some(self.scores))
    }

    /// Check an already-normalized word against every rule without accepting it
    ///
    /// Rules run in this order: original, possible, real word, long enough,
    /// distinct from root.
    ///
    /// # Errors
    ///
    /// Returns the first rule the word breaks.
    pub fn validate(&self, word: &str) -> Result<(), Rejection> {
        if !self.is_original(word) {
            return Err(Rejection::Duplicate);
        }
        if !self.is_possible(word) {
            return Err(Rejection::NotComposable);
        }
        if !self.is_real_word(word) {
            return Err(Rejection::NotAWord);
        }
        if !is_long_enough(word) {
            return Err(Rejection::TooShort);
        }
        if !self.is_distinct_from_root(word) {
            return Err(Rejection::SameAsRoot);
        }
        Ok(())
    }

    /// Whether the word has not been accepted yet this round
    #[must_use]
    pub fn is_original(&self, word: &str) -> bool {
        !self.seen.contains(word)
    }

    /// Whether the word can be spelled from the root word's letters
    #[must_use]
    pub fn is_possible(&self, word: &str) -> bool {
        self.pool.can_spell(word)
    }

    /// Whether the dictionary recognizes the word in the configured language
    #[must_use]
    pub fn is_real_word(&self, word: &str) -> bool {
        self.dictionary.is_recognized(word, &self.config.language)
    }

    /// Whether the word differs from the root word
    #[must_use]
    pub fn is_distinct_from_root(&self, word: &str) -> bool {
        word != self.root
    }

    /// Start a new round
    ///
    /// The root is normalized; a missing or blank root falls back to the
    /// configured default. Used words and the round score are cleared, the
    /// session score is kept.
    pub fn start_round(&mut self, root: Option<&str>) {
        let root = root.map(normalize).filter(|r| !r.is_empty());
        self.root = root.unwrap_or_else(|| fallback_root(&self.config));
        self.pool = LetterPool::new(&self.root);
        self.used.clear();
        self.seen.clear();
        self.scores.round = 0;

        info!(root = %self.root, session_score = self.scores.session, "round started");
    }

    /// Start a new round with a root word drawn from `source`
    pub fn next_round<S: WordSource + ?Sized>(&mut self, source: &mut S) {
        let root = source.next_root_word();
        if root.is_none() {
            debug!("word source empty, using fallback root");
        }
        self.start_round(root.as_deref());
    }

    /// Root word of the current round
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    /// Letters accepted this round
    #[must_use]
    pub const fn round_score(&self) -> usize {
        self.scores.round
    }

    /// Letters accepted across all rounds
    #[must_use]
    pub const fn session_score(&self) -> usize {
        self.scores.session
    }

    /// Current scores
    #[must_use]
    pub const fn scores(&self) -> Scores {
        self.scores
    }

    /// Language passed to the dictionary
    #[must_use]
    pub fn language(&self) -> &str {
        &self.config.language
    }

    /// The dictionary this engine consults
    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }
}

fn fallback_root(config: &GameConfig) -> String {
    let root = normalize(&config.fallback_root);
    if root.is_empty() {
        DEFAULT_ROOT.to_string()
    } else {
        root
    }
}

/// Whether the word has at least `MIN_WORD_LEN` characters
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use crate::source::FixedSource;
    use proptest::prelude::*;

    fn english(words: &[&str]) -> WordSet {
        WordSet::new("en", words)
    }

    fn silkworm_engine() -> RoundEngine<WordSet> {
        let words = english(&["silk", "silkworm", "silkworms", "si", "worm", "milk", "slim"]);
        RoundEngine::new(words, "silkworm")
    }

    #[test]
    fn accepts_valid_word() {
        let mut engine = silkworm_engine();

        let scores = engine.submit("silk").unwrap().unwrap();

        assert_eq!(scores, Scores { round: 4, session: 4 });
        assert_eq!(engine.used_words(), ["silk".to_string()]);
    }

    #[test]
    fn silkworm_walkthrough() {
        let mut engine = silkworm_engine();

        assert_eq!(engine.submit("silk").unwrap().unwrap().round, 4);
        assert_eq!(engine.submit("silk"), Err(Rejection::Duplicate));
        assert_eq!(engine.submit("silkworms"), Err(Rejection::NotComposable));
        assert_eq!(engine.submit("si"), Err(Rejection::TooShort));
        assert_eq!(engine.submit("silkworm"), Err(Rejection::SameAsRoot));
        assert_eq!(engine.round_score(), 4);
    }

    #[test]
    fn default_game_accepts_words_from_embedded_dictionary() {
        let mut engine = RoundEngine::with_config(WordSet::embedded(), GameConfig::default());
        assert_eq!(engine.root_word(), DEFAULT_ROOT);

        assert_eq!(engine.submit("silk"), Ok(Some(Scores { round: 4, session: 4 })));
        assert_eq!(engine.submit("sir"), Ok(Some(Scores { round: 7, session: 7 })));
        assert_eq!(engine.submit("ski"), Ok(Some(Scores { round: 10, session: 10 })));
        assert_eq!(engine.submit("silk"), Err(Rejection::Duplicate));
        assert_eq!(engine.submit("silkworms"), Err(Rejection::NotComposable));
        assert_eq!(engine.submit("silkworm"), Err(Rejection::SameAsRoot));

        engine.start_round(Some("mountain"));
        assert_eq!(engine.submit("amount"), Ok(Some(Scores { round: 6, session: 16 })));
        assert_eq!(engine.submit("nation"), Ok(Some(Scores { round: 12, session: 22 })));
        assert_eq!(engine.submit("stone"), Err(Rejection::NotComposable));
    }

    #[test]
    fn unknown_word_rejected_without_state_change() {
        let mut engine = RoundEngine::new(english(&["apple"]), "apple");

        assert_eq!(engine.submit("appl"), Err(Rejection::NotAWord));
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.scores(), Scores::default());
    }

    #[test]
    fn blank_input_ignored() {
        let mut engine = silkworm_engine();

        assert_eq!(engine.submit(""), Ok(None));
        assert_eq!(engine.submit("   \n"), Ok(None));
        assert!(engine.used_words().is_empty());
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let mut engine = silkworm_engine();

        engine.submit("  SiLk \n").unwrap();

        assert_eq!(engine.used_words(), ["silk".to_string()]);
        assert_eq!(engine.submit("silk"), Err(Rejection::Duplicate));
    }

    #[test]
    fn most_recent_word_first() {
        let mut engine = silkworm_engine();

        engine.submit("silk").unwrap();
        engine.submit("worm").unwrap();
        engine.submit("milk").unwrap();

        assert_eq!(engine.used_words(), ["milk", "worm", "silk"]);
        assert_eq!(engine.round_score(), 12);
    }

    #[test]
    fn duplicate_reported_before_other_rules() {
        let mut engine = silkworm_engine();
        engine.submit("silk").unwrap();

        // Duplicate wins even though the word is otherwise fine
        assert_eq!(engine.validate("silk"), Err(Rejection::Duplicate));
    }

    #[test]
    fn composability_checked_before_dictionary() {
        let engine = silkworm_engine();

        // Neither spellable nor a word
        assert_eq!(engine.validate("zebra"), Err(Rejection::NotComposable));
    }

    #[test]
    fn dictionary_checked_before_length() {
        let engine = silkworm_engine();

        // Spellable, too short, and unknown
        assert_eq!(engine.validate("ok"), Err(Rejection::NotAWord));
    }

    #[test]
    fn dictionary_uses_configured_language() {
        let config = GameConfig {
            language: "de".to_string(),
            ..GameConfig::default()
        };
        let mut engine = RoundEngine::with_config(english(&["silk"]), config);

        assert_eq!(engine.language(), "de");
        assert_eq!(engine.submit("silk"), Err(Rejection::NotAWord));
    }

    #[test]
    fn start_round_resets_round_but_not_session() {
        let mut engine = silkworm_engine();
        engine.submit("silk").unwrap();
        engine.submit("worm").unwrap();

        engine.start_round(Some("Baseball"));

        assert_eq!(engine.root_word(), "baseball");
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.round_score(), 0);
        assert_eq!(engine.session_score(), 8);
    }

    #[test]
    fn used_words_can_be_reused_next_round() {
        let mut engine = silkworm_engine();
        engine.submit("silk").unwrap();

        engine.start_round(Some("silkworm"));

        assert_eq!(engine.submit("silk").unwrap().unwrap(), Scores { round: 4, session: 8 });
    }

    #[test]
    fn missing_root_falls_back_to_default() {
        let mut engine = silkworm_engine();

        engine.start_round(Some("baseball"));
        engine.start_round(None);
        assert_eq!(engine.root_word(), DEFAULT_ROOT);

        engine.start_round(Some("   "));
        assert_eq!(engine.root_word(), DEFAULT_ROOT);
    }

    #[test]
    fn configured_fallback_root() {
        let config = GameConfig {
            fallback_root: "Apple".to_string(),
            ..GameConfig::default()
        };
        let mut engine = RoundEngine::with_config(english(&[]), config);
        assert_eq!(engine.root_word(), "apple");

        engine.start_round(None);
        assert_eq!(engine.root_word(), "apple");
    }

    #[test]
    fn next_round_draws_from_source() {
        let mut engine = silkworm_engine();
        let mut source = FixedSource::new(["baseball", "apple"]);

        engine.next_round(&mut source);
        assert_eq!(engine.root_word(), "baseball");
        engine.next_round(&mut source);
        assert_eq!(engine.root_word(), "apple");
    }

    #[test]
    fn next_round_with_empty_source_uses_fallback() {
        let mut engine = RoundEngine::new(english(&[]), "baseball");
        let mut source = FixedSource::default();

        engine.next_round(&mut source);

        assert_eq!(engine.root_word(), DEFAULT_ROOT);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(is_long_enough("été"));
        assert!(!is_long_enough("é"));

        let mut engine = RoundEngine::new(english(&["été"]), "étété");
        assert_eq!(engine.submit("été").unwrap().unwrap().round, 3);
    }

    const POOL: &[&str] = &["silk", "worm", "milk", "slim", "skim", "soil", "oil", "si", "sky"];

    proptest! {
        #[test]
        fn scores_track_used_words(picks in prop::collection::vec(0..POOL.len(), 0..30)) {
            let mut engine = RoundEngine::new(WordSet::new("en", POOL), "silkworm");
            let mut session_before = engine.session_score();

            for idx in picks {
                let word = POOL[idx];
                let before = (engine.used_words().to_vec(), engine.scores());

                match engine.submit(word) {
                    Ok(Some(scores)) => {
                        prop_assert_eq!(scores.session, session_before + word.chars().count());
                        session_before = scores.session;
                    }
                    Ok(None) => prop_assert!(false, "non-blank input ignored"),
                    Err(_) => {
                        prop_assert_eq!(engine.used_words(), before.0.as_slice());
                        prop_assert_eq!(engine.scores(), before.1);
                    }
                }

                let total: usize = engine.used_words().iter().map(|w| w.chars().count()).sum();
                prop_assert_eq!(engine.round_score(), total);
            }
        }

        #[test]
        fn rejection_is_repeatable(word in "[a-z]{0,10}") {
            let mut engine = RoundEngine::new(WordSet::new("en", POOL), "silkworm");
            engine.submit("silk").unwrap();

            let first = engine.submit(&word);
            if first.is_err() {
                let snapshot = engine.scores();
                prop_assert_eq!(engine.submit(&word), first);
                prop_assert_eq!(engine.scores(), snapshot);
            }
        }

        #[test]
        fn start_round_always_clears(root in "[a-z]{0,12}", words in prop::collection::vec(0..POOL.len(), 0..10)) {
            let mut engine = RoundEngine::new(WordSet::new("en", POOL), "silkworm");
            for idx in words {
                let _ = engine.submit(POOL[idx]);
            }
            let session = engine.session_score();

            engine.start_round(Some(root.as_str()));

            prop_assert!(engine.used_words().is_empty());
            prop_assert_eq!(engine.round_score(), 0);
            prop_assert_eq!(engine.session_score(), session);
        }
    }
}
