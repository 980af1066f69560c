//! Wordle Hint - CLI
//!
//! Narrows the bundled dictionary to the candidates consistent with your
//! guesses and recommends a next guess. Feedback encoding per letter:
//! `g` correct position, `y` present elsewhere, `_` absent.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wordle_hint::{
    commands::run_assist,
    output::print_report,
    wordlists::{WORDLES, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle-hint",
    about = "Narrow the wordle dictionary from guess feedback and recommend a next guess",
    version,
    author
)]
struct Cli {
    /// Show count of possible candidates
    #[arg(short = 'c', long)]
    count: bool,

    /// Show best guess
    #[arg(short = 'g', long)]
    guess: bool,

    /// Path to a custom dictionary file (one word per line)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Guesses as word:result tokens, e.g. salet:_ygy_
    ///
    /// Extra result segments track parallel puzzles: salet:_ygy_:ggggg
    /// applies the same guess to two independent boards.
    #[arg(required = true, value_name = "WORD:RESULT[:RESULT...]")]
    guesses: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let report = match &cli.wordlist {
        Some(path) => {
            let lines = load_from_file(path)
                .with_context(|| format!("failed to read wordlist {}", path.display()))?;
            run_assist(&cli.guesses, &lines)?
        }
        None => run_assist(&cli.guesses, WORDLES)?,
    };

    print_report(&report, cli.count, cli.guess);
    Ok(())
}
