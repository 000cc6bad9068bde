//! Text normalization for extracted character data.

use regex::Regex;

/// Normalizes raw character data into clean, word-separated text.
///
/// Holds the compiled pattern so one instance can normalize many chunks
/// without recompiling.
pub struct Normalizer {
    non_word: Regex,
}

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            non_word: Regex::new(r"\W+").unwrap(),
        }
    }

    /// Normalize a chunk of character data.
    ///
    /// Trims leading and trailing whitespace, then collapses every maximal
    /// run of non-word characters (anything other than letters, digits, and
    /// the underscore) into a single space. The result may be empty, or a
    /// single space if the input was entirely non-word characters.
    pub fn normalize(&self, raw: &str) -> String {
        self.non_word.replace_all(raw.trim(), " ").into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
