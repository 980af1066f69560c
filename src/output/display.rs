//! Report printing
//!
//! Renders an assist report: candidate counts, recommended guesses, and in
//! multi-puzzle mode the overall pick among still-open puzzles. A puzzle
//! with no recommendation renders as `-`.

use crate::commands::AssistReport;
use crate::solver::Solution;
use colored::Colorize;

fn guess_text(solution: &Solution) -> String {
    solution
        .best_guess
        .as_ref()
        .map_or_else(|| "-".to_string(), |word| word.text().to_string())
}

/// Print the report according to the output flags
///
/// With neither flag set, reports only whether any candidate survives for
/// the first puzzle.
pub fn print_report(report: &AssistReport, show_count: bool, show_guess: bool) {
    let mut printed = false;

    if show_count {
        let counts = report
            .solutions
            .iter()
            .map(|s| s.candidate_count().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} {}",
            "Possible Candidates:".cyan(),
            counts.bright_yellow()
        );
        printed = true;
    }

    if show_guess {
        let plural = if report.is_multi() { "es" } else { "" };
        let guesses = report
            .solutions
            .iter()
            .map(guess_text)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{} {}",
            format!("Best Guess{plural}:").cyan(),
            guesses.green().bold()
        );
        if report.is_multi() {
            let overall = report
                .best_overall
                .map_or_else(|| "-".to_string(), |i| guess_text(&report.solutions[i]));
            println!("{} {}", "Bestest Guess:".cyan(), overall.green().bold());
        }
        printed = true;
    }

    if !printed {
        let any_left = report
            .solutions
            .first()
            .is_some_and(|s| s.candidate_count() > 0);
        if any_left {
            println!("{}", "Hmm, yes, there's a wordle".green());
        } else {
            println!("{}", "Nope, no wordle here".red());
        }
    }
}
