//! Single-game lifecycle
//!
//! A `Game` starts in progress with a fixed secret and an empty history,
//! accepts one guess per turn, and becomes terminal the moment a guess
//! matches the secret or the guess allotment runs out. Terminal games reject
//! every further mutation.

use crate::core::{GuessResult, Word, WordError};
use std::fmt;
use std::time::SystemTime;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// Internal game identity
///
/// Only the already-resolved identity circulates inside the core; the opaque
/// external form is produced by a [`GameRefCodec`](crate::service::GameRefCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(u64);

impl GameId {
    /// Wrap a raw identity value
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw identity value
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for rejected game mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game is terminal; no further guesses are accepted
    AlreadyCompleted,
    /// The guess text is not a valid 5-letter word
    InvalidGuess(WordError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCompleted => write!(f, "Game is already completed"),
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AlreadyCompleted => None,
            Self::InvalidGuess(err) => Some(err),
        }
    }
}

/// What one accepted guess produced
///
/// `is_completed` is true exactly on the call that completed the game, which
/// is the caller's cue to report the outcome to the statistics aggregate -
/// once, since every later submission fails instead of returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Per-letter verdicts for this guess
    pub result: GuessResult,
    /// Whether the game just became terminal
    pub is_completed: bool,
    /// Whether the guess matched the secret exactly
    pub is_victory: bool,
    /// Number of guesses recorded so far, this one included
    pub guess_count: usize,
}

/// One game's state: secret, history, and completion flags
///
/// Invariants: guess and result histories stay the same length, never exceed
/// [`MAX_GUESSES`] entries, and stop growing once the game is completed.
/// Victory implies completion and an exact final match.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    secret: Word,
    guesses: Vec<Word>,
    results: Vec<GuessResult>,
    is_completed: bool,
    is_victory: bool,
    completed_at: Option<SystemTime>,
}

impl Game {
    /// Create a game in progress with an empty history
    #[must_use]
    pub const fn new(id: GameId, secret: Word) -> Self {
        Self {
            id,
            secret,
            guesses: Vec::new(),
            results: Vec::new(),
            is_completed: false,
            is_victory: false,
            completed_at: None,
        }
    }

    /// Submit one guess and advance the game
    ///
    /// Normalizes the text, scores it against the secret, appends the
    /// guess/result pair, and flips the completion flags when this guess
    /// matched the secret or exhausted the allotment. The completion
    /// timestamp is stamped exactly once, on the completing call.
    ///
    /// # Errors
    ///
    /// Returns an error, without mutating anything, if:
    /// - `GameError::AlreadyCompleted` - the game is terminal
    /// - `GameError::InvalidGuess` - the text is not a 5-letter word
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        if self.is_completed {
            return Err(GameError::AlreadyCompleted);
        }

        let guess = Word::new(text).map_err(GameError::InvalidGuess)?;
        let result = GuessResult::evaluate(&guess, &self.secret);
        let is_victory = guess == self.secret;

        self.guesses.push(guess);
        self.results.push(result);

        let guess_count = self.guesses.len();
        let is_completed = is_victory || guess_count >= MAX_GUESSES;

        if is_completed {
            self.is_completed = true;
            self.is_victory = is_victory;
            self.completed_at = Some(SystemTime::now());
        }

        Ok(GuessOutcome {
            result,
            is_completed,
            is_victory,
            guess_count,
        })
    }

    /// Get the game identity
    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Get the secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Get the recorded guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Get the recorded results, index-aligned with the guesses
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Whether the game is terminal
    #[inline]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Whether the game was won
    #[inline]
    #[must_use]
    pub const fn is_victory(&self) -> bool {
        self.is_victory
    }

    /// When the game completed, if it has
    #[inline]
    #[must_use]
    pub const fn completed_at(&self) -> Option<SystemTime> {
        self.completed_at
    }

    /// How many guesses the player has left
    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }
}
