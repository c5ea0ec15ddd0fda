//! Guess evaluation and verdict representation
//!
//! Scoring a guess against the secret produces one verdict per letter
//! position:
//! - `Absent` - letter not in the secret (or all its copies already claimed)
//! - `Present` - letter in the secret, wrong position
//! - `Correct` - letter in the correct position

use super::Word;

/// Verdict for a single letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterVerdict {
    /// Letter does not occur in the secret, or its occurrences are used up
    Absent,
    /// Letter occurs in the secret but not at this position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl LetterVerdict {
    /// The emoji tile for this verdict
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Ordered per-letter verdicts for one guess
///
/// Index-aligned with the guess's letters. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterVerdict; 5]);

impl GuessResult {
    /// All correct (the guess equals the secret)
    pub const PERFECT: Self = Self([LetterVerdict::Correct; 5]);

    /// Score `guess` against `secret`
    ///
    /// This implements the conventional feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as `Correct` and consume
    ///    them from the secret's per-letter pool
    /// 2. Second pass: left to right, mark `Present` while the pool still
    ///    holds the letter, otherwise `Absent`
    ///
    /// Reserving `Correct` matches before handing out `Present` is what keeps
    /// excess duplicate letters in the guess from being over-credited.
    ///
    /// # Examples
    /// ```
    /// use wordle_referee::core::{GuessResult, LetterVerdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let result = GuessResult::evaluate(&guess, &secret);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(result.verdicts()[2], LetterVerdict::Correct);
    /// assert_eq!(result.verdicts()[4], LetterVerdict::Correct);
    /// assert_eq!(result.count_correct(), 2);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Absent; 5];
        let mut remaining = secret.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == secret.chars()[i] {
                verdicts[i] = LetterVerdict::Correct;

                // Consume from the remaining pool
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced from whatever pool remains
        // Allow: Index needed to access guess[i] and check/set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if verdicts[i] == LetterVerdict::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    verdicts[i] = LetterVerdict::Present;
                    *count -= 1;
                }
            }
        }

        Self(verdicts)
    }

    /// Get the five verdicts, index-aligned with the guess
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; 5] {
        &self.0
    }

    /// Check if every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the `Correct` verdicts
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Correct)
            .count()
    }

    /// Count the `Present` verdicts
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Present)
            .count()
    }

    /// Convert to an emoji tile string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }

    /// Iterate over the verdicts in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterVerdict> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for GuessResult {
    type Output = LetterVerdict;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}
