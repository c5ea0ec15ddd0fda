//! Bulk game simulation
//!
//! Plays many games in parallel against one service and reports the
//! aggregate statistics. Doubles as a workout for the shared statistics
//! handle: every completing game reports through the same mutation path.

use crate::core::{GuessResult, Word};
use crate::game::{MAX_GUESSES, SharedStatistics, StatisticsSnapshot};
use crate::service::{
    GameService, InMemoryGameStore, MaskedCodec, RandomSecretSelector, WordListDictionary,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

type SimulationService =
    GameService<WordListDictionary, InMemoryGameStore, MaskedCodec, RandomSecretSelector>;

/// Outcome of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Games that ran to completion
    pub games_played: u64,
    /// Aggregate statistics after the run
    pub stats: StatisticsSnapshot,
    /// Wall-clock time for the whole run
    pub duration: Duration,
}

impl SimulationResult {
    /// Mean guesses per completed game (0 when none completed)
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.stats.total_games == 0 {
            return 0.0;
        }
        let total_guesses: usize = self
            .stats
            .guess_distribution
            .iter()
            .map(|(count, games)| count * games)
            .sum();
        total_guesses as f64 / self.stats.total_games as f64
    }
}

/// Play `games` full games in parallel and collect the statistics
///
/// Each simulated player guesses a random word that is still consistent
/// with every verdict it has seen, so most games finish inside the
/// allotment.
///
/// # Errors
///
/// Returns an error if the word list is empty.
pub fn run_simulation(words: &[Word], games: usize) -> Result<SimulationResult, String> {
    let selector =
        RandomSecretSelector::new(words.to_vec()).ok_or_else(|| "Word list is empty".to_string())?;
    let service = GameService::new(
        WordListDictionary::new(words),
        InMemoryGameStore::new(),
        MaskedCodec::default(),
        selector,
        SharedStatistics::new(),
    );

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    (0..games).into_par_iter().for_each(|_| {
        play_one(&service, words);
        pb.inc(1);
    });

    pb.finish_and_clear();

    let stats = service.statistics();
    Ok(SimulationResult {
        games_played: stats.total_games,
        stats,
        duration: start.elapsed(),
    })
}

/// Play a single game with consistency-filtered random guessing
fn play_one(service: &SimulationService, words: &[Word]) {
    let game_ref = service.start_game();
    let mut candidates: Vec<Word> = words.to_vec();

    for _ in 0..MAX_GUESSES {
        let Some(guess) = candidates.choose(&mut rand::rng()).cloned() else {
            return;
        };

        match service.submit_guess(&game_ref, guess.text()) {
            Ok(outcome) => {
                if outcome.is_completed {
                    return;
                }
                // Keep only candidates that would have produced this verdict
                candidates
                    .retain(|candidate| GuessResult::evaluate(&guess, candidate) == outcome.result);
            }
            Err(err) => {
                log::warn!("Simulated guess failed: {err}");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn simulation_completes_every_game() {
        let pool = words(&["world", "slate", "crane", "mount", "pride"]);
        let result = run_simulation(&pool, 20).unwrap();

        assert_eq!(result.games_played, 20);
        assert_eq!(result.stats.total_games, 20);

        let distributed: usize = result.stats.guess_distribution.values().sum();
        assert_eq!(distributed as u64, result.stats.total_games);
        assert!(result.stats.total_victories <= result.stats.total_games);
    }

    #[test]
    fn simulation_guess_counts_stay_in_range() {
        let pool = words(&["world", "slate", "crane"]);
        let result = run_simulation(&pool, 10).unwrap();

        for (&count, &games) in &result.stats.guess_distribution {
            assert!((1..=MAX_GUESSES).contains(&count));
            assert!(games > 0);
        }

        let avg = result.average_guesses();
        assert!(avg >= 1.0);
        assert!(avg <= MAX_GUESSES as f64);
    }

    #[test]
    fn simulation_rejects_empty_word_list() {
        assert!(run_simulation(&[], 5).is_err());
    }

    #[test]
    fn consistency_filter_wins_with_a_tiny_pool() {
        // With a pool this small the filter pins the secret fast
        let pool = words(&["world", "slate"]);
        let result = run_simulation(&pool, 10).unwrap();

        assert_eq!(result.stats.total_victories, result.stats.total_games);
    }
}
