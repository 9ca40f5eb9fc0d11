//! Word lists for Word Scramble
//!
//! Provides embedded root word and dictionary lists compiled into the binary,
//! plus loading of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;
