//! Word lists
//!
//! Provides the embedded dictionary compiled into the binary, and a loader
//! for custom word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDLES, WORDLES_COUNT};
