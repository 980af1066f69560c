//! The assist command
//!
//! Parses guess tokens of the form `word:result1[:result2...]` into
//! per-puzzle histories, solves every puzzle against the dictionary, and
//! packages the results for display. Each extra result segment applies the
//! same guessed word to another puzzle played in parallel.

use crate::core::{Guess, SolverError};
use crate::solver::{Puzzle, Solution, best_overall, solve_all};

/// Everything the output layer needs to report one invocation
#[derive(Debug)]
pub struct AssistReport {
    /// One solution per puzzle, in puzzle order
    pub solutions: Vec<Solution>,
    /// Index of the best puzzle to play next, when more than one is open
    pub best_overall: Option<usize>,
}

impl AssistReport {
    /// Whether this invocation tracked more than one puzzle
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.solutions.len() > 1
    }
}

/// Parse guess tokens into per-puzzle guess histories
///
/// Token `word:res1:res2` records `word` with feedback `res1` in puzzle 1
/// and `res2` in puzzle 2. An empty result segment stands for an unplayed
/// template and normalizes to all-absent.
///
/// # Errors
///
/// Returns `SolverError` for a token without any result segment, for a
/// result whose length differs from the word, or for an unknown marker.
pub fn parse_puzzles<T: AsRef<str>>(tokens: &[T]) -> Result<Vec<Puzzle>, SolverError> {
    let mut puzzles: Vec<Puzzle> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        let parts: Vec<&str> = token.split(':').collect();
        if parts.len() < 2 {
            return Err(SolverError::MalformedToken(token.to_string()));
        }

        let word = parts[0];
        for (index, result) in parts[1..].iter().enumerate() {
            if puzzles.len() <= index {
                puzzles.push(Puzzle::new());
            }
            if !result.is_empty() && word.len() != result.len() {
                return Err(SolverError::LengthMismatch {
                    word: word.to_string(),
                    result: (*result).to_string(),
                });
            }
            puzzles[index].push(Guess::new(word, result)?);
        }
    }

    Ok(puzzles)
}

/// Parse the tokens and solve every puzzle against the dictionary
///
/// # Errors
///
/// Propagates any token parsing failure; solving itself cannot fail.
pub fn run_assist<T, S>(tokens: &[T], dictionary: &[S]) -> Result<AssistReport, SolverError>
where
    T: AsRef<str>,
    S: AsRef<str> + Sync,
{
    let puzzles = parse_puzzles(tokens)?;
    let solutions = solve_all(&puzzles, dictionary);
    let best_overall = best_overall(&puzzles, &solutions);
    Ok(AssistReport {
        solutions,
        best_overall,
    })
}
