//! Word Scramble
//!
//! Make as many words as you can from the letters of a root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, RoundEngine};
//! use word_scramble::dictionary::WordSet;
//!
//! let dictionary = WordSet::new("en", ["silk", "worm", "silkworm"]);
//! let mut engine = RoundEngine::new(dictionary, "silkworm");
//!
//! assert_eq!(engine.submit("silk").unwrap().unwrap().round, 4);
//! assert_eq!(engine.submit("silk"), Err(Rejection::Duplicate));
//! assert_eq!(engine.submit("silkworm"), Err(Rejection::SameAsRoot));
//! ```

// Core game rules
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Root word sources
pub mod source;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
