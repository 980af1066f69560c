//! Core domain types
//!
//! Feedback markers, validated words, and the constraint set derived from a
//! guess history. Everything here is pure and synchronous.

pub mod constraints;
mod error;
pub mod guess;
mod word;

pub use constraints::{ConstraintSet, PositionRule};
pub use error::SolverError;
pub use guess::{Guess, Marker};
pub use word::{WORD_LEN, Word};
