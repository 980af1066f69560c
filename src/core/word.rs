//! Five-letter word representation
//!
//! A `Word` holds a validated lowercase five-letter word twice: as text for
//! display and as a fixed byte array for positional rule checks.

use crate::core::SolverError;
use std::fmt;

/// Number of letters in every puzzle word
pub const WORD_LEN: usize = 5;

/// A validated five-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a `Word`, lowercasing the input first
    ///
    /// # Errors
    /// Returns `SolverError` unless the input is exactly five ASCII letters.
    pub fn new(text: impl Into<String>) -> Result<Self, SolverError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(SolverError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SolverError::InvalidCharacters(text));
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// The word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as its five letter bytes
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// The letter at one position
    ///
    /// # Panics
    /// Panics for positions past the fifth letter.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Whether the letter appears anywhere in the word
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
