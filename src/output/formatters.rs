//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterVerdict, Word};
use colored::Colorize;

/// Format a guessed word with one colored letter per verdict
#[must_use]
pub fn colorize_guess(word: &Word, result: GuessResult) -> String {
    word.text()
        .chars()
        .zip(result.iter())
        .map(|(ch, verdict)| {
            let letter = ch.to_string();
            match verdict {
                LetterVerdict::Correct => letter.bright_green().bold().to_string(),
                LetterVerdict::Present => letter.bright_yellow().bold().to_string(),
                LetterVerdict::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn colorize_guess_keeps_every_letter() {
        let guess = word("crane");
        let secret = word("slate");
        let row = colorize_guess(&guess, GuessResult::evaluate(&guess, &secret));

        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(row.contains(letter), "missing {letter}");
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 10.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(10.0, 10.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(5.0, 10.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_overflow_clamped() {
        let bar = create_progress_bar(20.0, 10.0, 10);
        assert_eq!(bar, "██████████");
    }
}
