//! Aggregate statistics over completed games
//!
//! The aggregate trusts its caller to report each completed game exactly
//! once; it keeps running counters plus the per-game guess counts, and
//! derives the win rate and guess distribution on demand.

use super::session::MAX_GUESSES;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Error type for rejected outcome reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
    /// Guess count outside the 1..=6 range a completed game can produce
    InvalidGuessCount(usize),
}

impl fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessCount(count) => {
                write!(
                    f,
                    "Guess count must be between 1 and {MAX_GUESSES}, got {count}"
                )
            }
        }
    }
}

impl std::error::Error for StatisticsError {}

/// Running aggregate counters over all completed games
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    total_games: u64,
    total_victories: u64,
    guess_counts: Vec<usize>,
}

/// Read-only projection of the aggregate with derived values
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    /// Completed games reported so far
    pub total_games: u64,
    /// Victorious games among them
    pub total_victories: u64,
    /// Victories as a percentage of completed games (0 when none)
    pub win_rate: f64,
    /// Guess count (1..=6) mapped to how many games took exactly that many
    pub guess_distribution: HashMap<usize, usize>,
}

impl Statistics {
    /// Create an empty aggregate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed game's outcome
    ///
    /// # Errors
    ///
    /// Returns `StatisticsError::InvalidGuessCount`, mutating nothing, if
    /// `guess_count` is outside 1..=6.
    pub fn record_outcome(
        &mut self,
        is_victory: bool,
        guess_count: usize,
    ) -> Result<(), StatisticsError> {
        if !(1..=MAX_GUESSES).contains(&guess_count) {
            return Err(StatisticsError::InvalidGuessCount(guess_count));
        }

        self.total_games += 1;
        if is_victory {
            self.total_victories += 1;
        }
        self.guess_counts.push(guess_count);

        Ok(())
    }

    /// Project the current counters into a snapshot
    ///
    /// The win rate is 0 while no game has completed; the distribution
    /// counts occurrences of each guess count.
    #[must_use]
    pub fn snapshot(&self) -> StatisticsSnapshot {
        let win_rate = if self.total_games > 0 {
            (self.total_victories as f64 / self.total_games as f64) * 100.0
        } else {
            0.0
        };

        let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
        for &count in &self.guess_counts {
            *guess_distribution.entry(count).or_insert(0) += 1;
        }

        StatisticsSnapshot {
            total_games: self.total_games,
            total_victories: self.total_victories,
            win_rate,
            guess_distribution,
        }
    }

    /// Completed games reported so far
    #[inline]
    #[must_use]
    pub const fn total_games(&self) -> u64 {
        self.total_games
    }

    /// Victorious games reported so far
    #[inline]
    #[must_use]
    pub const fn total_victories(&self) -> u64 {
        self.total_victories
    }

    /// Per-game guess counts in completion order
    #[inline]
    #[must_use]
    pub fn guess_counts(&self) -> &[usize] {
        &self.guess_counts
    }
}

/// Shared handle to the process-wide aggregate
///
/// Completing games report through whichever clone they hold; the inner
/// mutex is the single mutation path that keeps concurrent reports from
/// losing updates.
#[derive(Debug, Default, Clone)]
pub struct SharedStatistics {
    inner: Arc<Mutex<Statistics>>,
}

impl SharedStatistics {
    /// Create a handle to a fresh, empty aggregate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed game's outcome
    ///
    /// # Errors
    ///
    /// Returns `StatisticsError::InvalidGuessCount` if `guess_count` is
    /// outside 1..=6.
    pub fn record_outcome(
        &self,
        is_victory: bool,
        guess_count: usize,
    ) -> Result<(), StatisticsError> {
        self.lock().record_outcome(is_victory, guess_count)
    }

    /// Project the current counters into a snapshot
    #[must_use]
    pub fn snapshot(&self) -> StatisticsSnapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Statistics> {
        // Plain counters hold no invariant a panicked holder could tear
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
