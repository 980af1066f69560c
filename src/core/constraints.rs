//! Positional matching rules derived from a guess history
//!
//! A `ConstraintSet` is the anchored per-position rule the candidate filter
//! applies: each of the five positions is either fixed to a known letter or
//! carries a deny-set, and a separate list of letters must appear somewhere
//! in the word. Everything is recomputed from scratch on each solve, nothing
//! here is persisted.

use crate::core::guess::{Guess, Marker, absent_letters, present_letters};
use crate::core::word::{WORD_LEN, Word};

/// Matching rule for a single letter position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionRule {
    /// The position is resolved to this letter
    Fixed(u8),
    /// The position must not hold any of these letters
    Excluded(Vec<u8>),
}

impl PositionRule {
    /// Whether a letter is allowed at this position
    #[must_use]
    pub fn allows(&self, letter: u8) -> bool {
        match self {
            Self::Fixed(required) => letter == *required,
            Self::Excluded(denied) => !denied.contains(&letter),
        }
    }
}

/// The full set of constraints a candidate word must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    positions: [PositionRule; WORD_LEN],
    required: Vec<u8>,
}

impl ConstraintSet {
    /// Derive the constraints implied by a guess history
    ///
    /// A position is fixed by the first guess (in input order) carrying a
    /// correct mark there. Unfixed positions deny all absent letters plus
    /// every letter marked present-elsewhere at that exact position, since
    /// a misplaced letter cannot repeat at the same position.
    ///
    /// Known limitation: a letter that is present-elsewhere at one position
    /// and correct at another is not special-cased beyond the literal
    /// exclusion; see the overlap regression test.
    #[must_use]
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        let absent = absent_letters(guesses);
        let required = present_letters(guesses);

        let positions = std::array::from_fn(|i| {
            for guess in guesses {
                if guess.markers()[i] == Marker::Correct {
                    return PositionRule::Fixed(guess.word().char_at(i));
                }
            }
            let mut denied = absent.clone();
            for guess in guesses {
                if guess.markers()[i] == Marker::Present {
                    let letter = guess.word().char_at(i);
                    if !denied.contains(&letter) {
                        denied.push(letter);
                    }
                }
            }
            PositionRule::Excluded(denied)
        });

        Self {
            positions,
            required,
        }
    }

    /// The rule for one position
    #[must_use]
    pub fn position(&self, index: usize) -> &PositionRule {
        &self.positions[index]
    }

    /// Letters that must appear somewhere in the candidate
    #[must_use]
    pub fn required(&self) -> &[u8] {
        &self.required
    }

    /// Whether a word passes every positional rule
    #[must_use]
    pub fn position_match(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .enumerate()
            .all(|(i, rule)| rule.allows(word.char_at(i)))
    }

    /// Whether a word contains every required letter, position agnostic
    #[must_use]
    pub fn has_required(&self, word: &Word) -> bool {
        self.required.iter().all(|&letter| word.contains(letter))
    }

    /// Whether a word satisfies the whole constraint set
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.position_match(word) && self.has_required(word)
    }
}
