//! Dictionary loading
//!
//! Reads a custom word list from a file, one word per line. Lines are kept
//! raw here: shape validation happens in the candidate filter, where
//! non-conforming entries are skipped rather than rejected.

use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary lines from a file
///
/// Blank lines are dropped; everything else is passed through untouched.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read. A missing dictionary is
/// an unrecoverable configuration error for the caller, never retried.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn temp_wordlist(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_file_keeps_lines_in_order() {
        let path = temp_wordlist("wordle_hint_loader_order.txt", "crane\nslate\nirate\n");
        let lines = load_from_file(&path).unwrap();
        assert_eq!(lines, vec!["crane", "slate", "irate"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_file_drops_blank_lines_only() {
        let path = temp_wordlist(
            "wordle_hint_loader_blank.txt",
            "crane\n\n  \ntoolong\nslate\n",
        );
        let lines = load_from_file(&path).unwrap();
        // malformed entries are kept; the filter skips them later
        assert_eq!(lines, vec!["crane", "toolong", "slate"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_file_missing_is_an_error() {
        assert!(load_from_file("/definitely/not/a/wordlist.txt").is_err());
    }
}
