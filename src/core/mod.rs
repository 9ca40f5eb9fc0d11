//! Core game rules
//!
//! The round engine and the letter pool it validates against. Nothing here does
//! I/O; the dictionary and the root word supply are injected.

mod letters;
mod rejection;
mod round;

pub use letters::LetterPool;
pub use rejection::Rejection;
pub use round::{
    DEFAULT_ROOT, GameConfig, MIN_WORD_LEN, RoundEngine, Scores, is_long_enough, normalize,
};
