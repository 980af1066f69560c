//! Candidate scoring and recommendation
//!
//! The scorer builds an "ideal word" from the most frequent letter at each
//! position across the remaining candidates, then ranks every candidate by
//! how closely it tracks that ideal, penalizing repeated letters so the
//! recommendation stays information-dense.

use crate::core::{WORD_LEN, Word};

const ALPHABET: usize = 26;

/// Build the per-position majority letters across the candidates
///
/// The ideal word is a scoring reference only; it need not be a dictionary
/// word. Ties resolve to the first letter reaching the maximum in a fixed
/// `a..z` tally scan, so tied inputs always produce the same ideal.
///
/// Returns `None` when there are no candidates.
#[must_use]
pub fn ideal_word(candidates: &[Word]) -> Option<[u8; WORD_LEN]> {
    if candidates.is_empty() {
        return None;
    }

    let mut ideal = [0u8; WORD_LEN];
    for (position, slot) in ideal.iter_mut().enumerate() {
        let mut tally = [0u32; ALPHABET];
        for word in candidates {
            tally[usize::from(word.char_at(position) - b'a')] += 1;
        }

        let mut best_count = 0u32;
        for (index, &count) in tally.iter().enumerate() {
            if count > best_count {
                best_count = count;
                *slot = b'a' + index as u8;
            }
        }
    }
    Some(ideal)
}

/// Score a candidate against the ideal word
///
/// One point per position agreeing with the ideal letter, minus one point
/// per pair of positions sharing the same letter.
#[must_use]
pub fn score(word: &Word, ideal: &[u8; WORD_LEN]) -> i32 {
    let mut total = 0i32;
    for (position, &ideal_letter) in ideal.iter().enumerate() {
        if word.char_at(position) == ideal_letter {
            total += 1;
        }
    }

    for first in 0..WORD_LEN - 1 {
        for second in first + 1..WORD_LEN {
            if word.char_at(first) == word.char_at(second) {
                total -= 1;
            }
        }
    }
    total
}

/// Pick the recommended next guess among the candidates
///
/// The search floor is a score of 1: a candidate is only recommended with a
/// score strictly above the running maximum, so nothing scoring 1 or less is
/// ever returned and the first of any tied pair wins.
#[must_use]
pub fn best_guess(candidates: &[Word]) -> Option<Word> {
    let ideal = ideal_word(candidates)?;

    let mut max = 1i32;
    let mut best: Option<&Word> = None;
    for word in candidates {
        let candidate_score = score(word, &ideal);
        if candidate_score > max {
            max = candidate_score;
            best = Some(word);
        }
    }
    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn ideal_word_majority_per_position() {
        let candidates = words(&["crane", "crate", "brine"]);
        // position majorities: c, r, a, n, e
        assert_eq!(ideal_word(&candidates), Some(*b"crane"));
    }

    #[test]
    fn ideal_word_tie_resolves_to_first_in_scan_order() {
        let candidates = words(&["crane", "brine"]);
        let ideal = ideal_word(&candidates).unwrap();
        // every position except the last is a 1-1 tie; the alphabetically
        // first letter wins the fixed-order tally scan
        assert_eq!(ideal, *b"brane");
    }

    #[test]
    fn ideal_word_empty_candidates() {
        assert_eq!(ideal_word(&[]), None);
    }

    #[test]
    fn score_counts_matches_and_penalizes_duplicates() {
        let ideal = *b"crane";
        assert_eq!(score(&Word::new("crane").unwrap(), &ideal), 5);
        assert_eq!(score(&Word::new("crate").unwrap(), &ideal), 4);
        // "eerie" has three e's (three pairs) and matches ideal only at
        // position 4
        assert_eq!(score(&Word::new("eerie").unwrap(), &ideal), 1 - 3);
        // "aaaaa" is ten pairs and matches the ideal a at position 2
        assert_eq!(score(&Word::new("aaaaa").unwrap(), &ideal), 1 - 10);
    }

    #[test]
    fn best_guess_prefers_ideal_alignment() {
        let candidates = words(&["crane", "crate", "brine"]);
        // ideal is "crane"; crane scores 5, crate 4, brine 3
        assert_eq!(best_guess(&candidates).unwrap().text(), "crane");
    }

    // A candidate equal to the ideal word scores the maximum attainable for
    // its duplicate structure: no other candidate with the same or more
    // repeated letters can beat it.
    #[test]
    fn best_guess_monotone_in_ideal_agreement() {
        let candidates = words(&["slate", "slant", "plate", "slide"]);
        let ideal = ideal_word(&candidates).unwrap();
        let ideal_scores: Vec<i32> = candidates.iter().map(|w| score(w, &ideal)).collect();
        let winner = best_guess(&candidates).unwrap();
        let winner_score = score(&winner, &ideal);
        assert!(ideal_scores.iter().all(|s| *s <= winner_score));
    }

    #[test]
    fn best_guess_floor_yields_no_recommendation() {
        // single candidate full of duplicates: 5 matches minus 10 pairs
        let candidates = words(&["aaaaa"]);
        assert_eq!(best_guess(&candidates), None);
    }

    #[test]
    fn best_guess_empty_candidates() {
        assert_eq!(best_guess(&[]), None);
    }

    #[test]
    fn best_guess_tie_keeps_first_candidate() {
        // ideal is "abcde"; both candidates score 4, so a later equal score
        // never displaces the earlier winner
        let candidates = words(&["abcdz", "abcze"]);
        let ideal = ideal_word(&candidates).unwrap();
        assert_eq!(ideal, *b"abcde");
        assert_eq!(score(&candidates[0], &ideal), score(&candidates[1], &ideal));
        assert_eq!(best_guess(&candidates).unwrap().text(), "abcdz");
    }

    #[test]
    fn single_diverse_candidate_recommends_itself() {
        let candidates = words(&["arise"]);
        assert_eq!(best_guess(&candidates).unwrap().text(), "arise");
    }
}
