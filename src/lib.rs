//! Wordle Hint
//!
//! A constraint solver for Wordle-style puzzles: feed it your guesses and
//! their feedback, and it narrows the dictionary to the consistent
//! candidates and recommends the most informative next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hint::core::Guess;
//! use wordle_hint::solver::solve;
//!
//! let history = [Guess::new("salet", "_ygy_").unwrap()];
//! let dictionary = ["salet", "cella", "aecia"];
//!
//! let solution = solve(&history, &dictionary);
//! println!("{} candidates left", solution.candidate_count());
//! ```

// Core domain types
pub mod core;

// Solving pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
