//! Solve orchestration
//!
//! One solve pass derives the constraints from a puzzle's guess history,
//! filters the dictionary, and scores the survivors. Several independent
//! puzzles from the same invocation are solved in parallel over the shared
//! read-only dictionary; results come back in puzzle order, so parallelism
//! never changes the output.

use crate::core::{ConstraintSet, Guess, Word};
use crate::solver::filter::filter_candidates;
use crate::solver::scorer::best_guess;
use rayon::prelude::*;

/// One independent puzzle's accumulated guess history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    guesses: Vec<Guess>,
}

impl Puzzle {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            guesses: Vec::new(),
        }
    }

    /// The guess history in input order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Append a guess to the history
    pub fn push(&mut self, guess: Guess) {
        self.guesses.push(guess);
    }

    /// Whether the feedback already contains an all-correct result
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.guesses.iter().any(Guess::is_solved)
    }
}

/// The outcome of one solve pass
#[derive(Debug, Clone)]
pub struct Solution {
    /// Recommended next guess, if any candidate scored above the floor
    pub best_guess: Option<Word>,
    /// Candidates consistent with the history, in dictionary order
    pub candidates: Vec<Word>,
}

impl Solution {
    /// Number of surviving candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Solve one puzzle: derive constraints, filter, score
///
/// An empty candidate list is a normal terminal state, not an error; it
/// yields a zero count and no recommendation.
#[must_use]
pub fn solve<S: AsRef<str>>(guesses: &[Guess], dictionary: &[S]) -> Solution {
    let constraints = ConstraintSet::from_guesses(guesses);
    let candidates = filter_candidates(dictionary, &constraints);
    let best_guess = best_guess(&candidates);
    Solution {
        best_guess,
        candidates,
    }
}

/// Solve every puzzle independently, in parallel
#[must_use]
pub fn solve_all<S: AsRef<str> + Sync>(puzzles: &[Puzzle], dictionary: &[S]) -> Vec<Solution> {
    puzzles
        .par_iter()
        .map(|puzzle| solve(puzzle.guesses(), dictionary))
        .collect()
}

/// Pick the overall best puzzle to play next
///
/// Among puzzles whose feedback is not already all-correct, the one with the
/// fewest remaining candidates; an earlier puzzle wins ties. `None` when
/// every puzzle is solved.
#[must_use]
pub fn best_overall(puzzles: &[Puzzle], solutions: &[Solution]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, (puzzle, solution)) in puzzles.iter().zip(solutions).enumerate() {
        if puzzle.is_solved() {
            continue;
        }
        match best {
            Some(current) if solutions[current].candidate_count() <= solution.candidate_count() => {}
            _ => best = Some(index),
        }
    }
    best
}
