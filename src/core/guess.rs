//! Guess feedback representation
//!
//! A `Guess` couples an attempted word with one marker per letter:
//! `g` (correct position), `y` (present elsewhere) or `_` (absent).
//! The derivation helpers turn an accumulated guess history into the
//! letters a candidate must avoid and the letters it must still contain.

use crate::core::word::WORD_LEN;
use crate::core::{SolverError, Word};
use rustc_hash::FxHashSet;

/// Per-letter feedback marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The letter is in its correct position (`g`)
    Correct,
    /// The letter exists in the word, but not at this position (`y`)
    Present,
    /// The letter does not appear in the word (`_`)
    Absent,
}

impl Marker {
    /// Parse a marker character
    ///
    /// # Errors
    /// Returns `SolverError::UnknownMarker` for anything outside `{_, y, g}`.
    pub const fn from_char(c: char) -> Result<Self, SolverError> {
        match c {
            'g' => Ok(Self::Correct),
            'y' => Ok(Self::Present),
            '_' => Ok(Self::Absent),
            other => Err(SolverError::UnknownMarker(other)),
        }
    }
}

/// One attempted word together with its five feedback markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    markers: [Marker; WORD_LEN],
}

impl Guess {
    /// Create a guess from a word and its result string
    ///
    /// The result string is lowercased before parsing. An empty result
    /// string normalizes to all-absent at construction, which stands in
    /// for a word that has not been played yet.
    ///
    /// # Errors
    /// Returns `SolverError` if the word is not five ASCII letters, the
    /// result length does not match, or a marker character is unknown.
    pub fn new(word: &str, result: &str) -> Result<Self, SolverError> {
        let word = Word::new(word)?;
        let result = result.to_lowercase();

        if result.is_empty() {
            return Ok(Self {
                word,
                markers: [Marker::Absent; WORD_LEN],
            });
        }

        if result.chars().count() != WORD_LEN {
            return Err(SolverError::LengthMismatch {
                word: word.text().to_string(),
                result,
            });
        }

        let mut markers = [Marker::Absent; WORD_LEN];
        for (i, c) in result.chars().enumerate() {
            markers[i] = Marker::from_char(c)?;
        }

        Ok(Self { word, markers })
    }

    /// The attempted word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The feedback markers, one per letter position
    #[inline]
    #[must_use]
    pub const fn markers(&self) -> &[Marker; WORD_LEN] {
        &self.markers
    }

    /// Whether this guess found the answer (all markers correct)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.markers.iter().all(|m| *m == Marker::Correct)
    }
}

/// Letters marked absent anywhere in the guess history
///
/// Deduplicated and sorted, so the derived constraints are deterministic
/// regardless of guess order.
#[must_use]
pub fn absent_letters(guesses: &[Guess]) -> Vec<u8> {
    let mut seen: FxHashSet<u8> = FxHashSet::default();
    for guess in guesses {
        for (i, marker) in guess.markers().iter().enumerate() {
            if *marker == Marker::Absent {
                seen.insert(guess.word().char_at(i));
            }
        }
    }
    let mut letters: Vec<u8> = seen.into_iter().collect();
    letters.sort_unstable();
    letters
}

/// Letters marked present-elsewhere, in history order, minus those already
/// resolved to a fixed position
///
/// For every correct-position mark in the history, one occurrence of that
/// letter is removed from the present list, scanning from the end backward.
/// With repeated letters this is a best-effort reconciliation; the
/// regression tests below pin the exact behavior.
#[must_use]
pub fn present_letters(guesses: &[Guess]) -> Vec<u8> {
    let mut present = Vec::new();
    let mut correct = Vec::new();
    for guess in guesses {
        for (i, marker) in guess.markers().iter().enumerate() {
            match marker {
                Marker::Present => present.push(guess.word().char_at(i)),
                Marker::Correct => correct.push(guess.word().char_at(i)),
                Marker::Absent => {}
            }
        }
    }

    for &letter in &correct {
        if let Some(index) = present.iter().rposition(|&p| p == letter) {
            present.remove(index);
        }
    }
    present
}
