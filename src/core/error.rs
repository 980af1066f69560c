//! Error type for feedback and word validation
//!
//! Guess feedback is untrusted external input; every malformed shape is
//! rejected here, before any constraint logic runs.

use std::fmt;

/// Errors raised while validating words, feedback, or CLI guess tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A word is not exactly five letters
    InvalidLength(usize),
    /// A word contains something other than ASCII letters
    InvalidCharacters(String),
    /// A result string contains a character outside `{_, y, g}`
    UnknownMarker(char),
    /// A guess word and its result string differ in length
    LengthMismatch { word: String, result: String },
    /// A CLI guess token does not have the shape `word:result[:result...]`
    MalformedToken(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacters(word) => {
                write!(f, "Word '{word}' must contain only ASCII letters")
            }
            Self::UnknownMarker(c) => write!(f, "Marker '{c}' is unknown (expected '_', 'y' or 'g')"),
            Self::LengthMismatch { word, result } => write!(
                f,
                "Guess and result are not of the same length: {word}:{result}: {} != {}",
                word.len(),
                result.len()
            ),
            Self::MalformedToken(token) => {
                write!(f, "Argument '{token}' is not of the form word:result[:result...]")
            }
        }
    }
}

impl std::error::Error for SolverError {}
