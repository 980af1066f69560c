//! Build script to generate the embedded dictionary
//!
//! Turns the bundled word list into a const array compiled into the binary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDLIST: &str = "data/wordles.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("wordles.rs");

    let content = fs::read_to_string(WORDLIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORDLIST}: {e}"));
    let words: Vec<&str> = content.lines().map(str::trim).collect();

    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(output, "/// Bundled dictionary of five-letter candidate words").unwrap();
    writeln!(output, "pub const WORDLES: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDLES").unwrap();
    writeln!(output, "pub const WORDLES_COUNT: usize = {};", words.len()).unwrap();

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={WORDLIST}");
}
