use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

// ASCII only: `\d` would also match other Unicode digit classes.
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]+").unwrap());

/// Byte ranges of the maximal decimal digit runs in `text`, left to right.
pub fn digit_runs(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    DIGIT_RUN.find_iter(text).map(|m| m.range())
}

pub fn contains_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_maximal_runs_in_order() {
        let text = "Walk 5000 steps in 30 min, 2x";
        let runs: Vec<&str> = digit_runs(text).map(|r| &text[r]).collect();
        assert_eq!(runs, vec!["5000", "30", "2"]);
    }

    #[test]
    fn no_runs_in_plain_text() {
        assert_eq!(digit_runs("Take a walk").count(), 0);
        assert!(!contains_digit("Take a walk"));
    }
}
