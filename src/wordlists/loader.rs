//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    /// The file could not be read
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contained no words
    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a newline-separated file
///
/// Entries are trimmed and lowercased; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-separated words
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_normalizes_entries() {
        let words = parse_words("Silkworm\n  apple \n\n# comment\nBASEBALL\r\n");
        assert_eq!(words, ["silkworm", "apple", "baseball"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let words = words_from_slice(&["silk", " ", "Worm"]);
        assert_eq!(words, ["silk", "worm"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("word_scramble_{}.txt", std::process::id()));
        fs::write(&path, "silkworm\nbaseball\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["silkworm", "baseball"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/nonexistent/word_scramble/start.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/word_scramble/start.txt"));
    }

    #[test]
    fn load_from_empty_file_fails() {
        let path =
            std::env::temp_dir().join(format!("word_scramble_empty_{}.txt", std::process::id()));
        fs::write(&path, "\n# nothing here\n").unwrap();

        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, WordListError::Empty { .. }));
    }
}
