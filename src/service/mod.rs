//! Game service - the inbound interface of the core
//!
//! Ties the state machine and the statistics aggregate to the injected
//! collaborators: every operation takes strings and opaque references at the
//! edge, resolves them, and runs the corresponding game transition. Word
//! legality and persistence always complete-or-fail before any state
//! changes, so each call is atomic-or-nothing.

mod boundary;
mod memory;

pub use boundary::{Dictionary, GameRef, GameRefCodec, GameStore, SecretSelector};
pub use memory::{
    FixedSecretSelector, InMemoryGameStore, MaskedCodec, RandomSecretSelector, WordListDictionary,
};

use crate::core::{Word, WordError};
use crate::game::{Game, GameError, GuessOutcome, SharedStatistics, StatisticsSnapshot};
use log::{debug, info, warn};
use std::fmt;

/// Error type for service operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The reference did not resolve to a live game
    GameNotFound,
    /// The dictionary does not accept the word
    UnknownWord(String),
    /// The secret for a new game is not a valid 5-letter word
    InvalidSecret(WordError),
    /// The game rejected the transition
    Game(GameError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameNotFound => write!(f, "Game not found"),
            Self::UnknownWord(text) => write!(f, "Not a playable word: {text}"),
            Self::InvalidSecret(err) => write!(f, "Invalid secret: {err}"),
            Self::Game(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GameNotFound | Self::UnknownWord(_) => None,
            Self::InvalidSecret(err) => Some(err),
            Self::Game(err) => Some(err),
        }
    }
}

/// The server-authoritative game surface
///
/// Generic over the four boundary capabilities so tests and the CLI can wire
/// in whatever stand-ins they need.
pub struct GameService<D, S, C, P> {
    dictionary: D,
    store: S,
    codec: C,
    selector: P,
    stats: SharedStatistics,
}

impl<D, S, C, P> GameService<D, S, C, P>
where
    D: Dictionary,
    S: GameStore,
    C: GameRefCodec,
    P: SecretSelector,
{
    /// Assemble a service from its collaborators
    pub const fn new(
        dictionary: D,
        store: S,
        codec: C,
        selector: P,
        stats: SharedStatistics,
    ) -> Self {
        Self {
            dictionary,
            store,
            codec,
            selector,
            stats,
        }
    }

    /// Start a game with a selector-chosen secret
    ///
    /// Returns the opaque reference the caller uses for every later
    /// operation on this game.
    pub fn start_game(&self) -> GameRef {
        let secret = self.selector.pick_secret();
        let id = self.store.create(secret);
        info!("Game {id} started");
        self.codec.encode(id)
    }

    /// Start a game with a caller-chosen secret
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidSecret` - the text is not a 5-letter word
    /// - `ServiceError::UnknownWord` - the dictionary rejects it
    pub fn create_game(&self, secret_text: &str) -> Result<GameRef, ServiceError> {
        let secret = Word::new(secret_text).map_err(ServiceError::InvalidSecret)?;

        if !self.dictionary.is_valid_word(secret.text()) {
            return Err(ServiceError::UnknownWord(secret_text.to_string()));
        }

        let id = self.store.create(secret);
        info!("Game {id} created with caller-chosen secret");
        Ok(self.codec.encode(id))
    }

    /// Submit one guess against a game
    ///
    /// Checks run in order: reference resolution, terminal-game rejection,
    /// dictionary legality, then the state-machine transition. When this
    /// call completes the game, its outcome is reported to the aggregate -
    /// exactly once, because every later submission fails instead.
    ///
    /// # Errors
    ///
    /// - `ServiceError::GameNotFound` - undecodable or unknown reference
    /// - `ServiceError::Game(GameError::AlreadyCompleted)` - terminal game
    /// - `ServiceError::UnknownWord` - the dictionary rejects the guess
    /// - `ServiceError::Game(GameError::InvalidGuess)` - malformed text
    pub fn submit_guess(
        &self,
        game_ref: &GameRef,
        guess_text: &str,
    ) -> Result<GuessOutcome, ServiceError> {
        let id = self
            .codec
            .decode(game_ref)
            .ok_or(ServiceError::GameNotFound)?;
        let game = self.store.snapshot(id).ok_or(ServiceError::GameNotFound)?;

        if game.is_completed() {
            return Err(ServiceError::Game(GameError::AlreadyCompleted));
        }

        if !self.dictionary.is_valid_word(guess_text) {
            return Err(ServiceError::UnknownWord(guess_text.to_string()));
        }

        let outcome = self
            .store
            .with_game(id, |game| game.submit_guess(guess_text))
            .ok_or(ServiceError::GameNotFound)?
            .map_err(ServiceError::Game)?;

        debug!(
            "Game {id} turn {}: {}",
            outcome.guess_count,
            outcome.result.to_emoji()
        );

        if outcome.is_completed {
            info!(
                "Game {id} completed: victory={} in {} guesses",
                outcome.is_victory, outcome.guess_count
            );
            if let Err(err) = self
                .stats
                .record_outcome(outcome.is_victory, outcome.guess_count)
            {
                // Unreachable for outcomes a game can produce
                warn!("Dropped outcome report for game {id}: {err}");
            }
        }

        Ok(outcome)
    }

    /// Read a point-in-time copy of a game
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::GameNotFound` for an undecodable or unknown
    /// reference.
    pub fn game(&self, game_ref: &GameRef) -> Result<Game, ServiceError> {
        let id = self
            .codec
            .decode(game_ref)
            .ok_or(ServiceError::GameNotFound)?;
        self.store.snapshot(id).ok_or(ServiceError::GameNotFound)
    }

    /// Project the aggregate statistics
    #[must_use]
    pub fn statistics(&self) -> StatisticsSnapshot {
        self.stats.snapshot()
    }

    /// The shared statistics handle this service reports into
    #[must_use]
    pub const fn statistics_handle(&self) -> &SharedStatistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;

    type TestService =
        GameService<WordListDictionary, InMemoryGameStore, MaskedCodec, FixedSecretSelector>;

    fn test_words() -> Vec<Word> {
        ["world", "slate", "crane", "mount", "pride", "toast", "speed"]
            .iter()
            .map(|t| Word::new(t).unwrap())
            .collect()
    }

    fn service_with_secret(secret: &str) -> TestService {
        let words = test_words();
        GameService::new(
            WordListDictionary::new(&words),
            InMemoryGameStore::new(),
            MaskedCodec::default(),
            FixedSecretSelector::new(Word::new(secret).unwrap()),
            SharedStatistics::new(),
        )
    }

    #[test]
    fn winning_first_guess_updates_statistics() {
        let service = service_with_secret("world");
        let game_ref = service.start_game();

        let outcome = service.submit_guess(&game_ref, "world").unwrap();

        assert_eq!(outcome.result, crate::core::GuessResult::PERFECT);
        assert!(outcome.is_completed);
        assert!(outcome.is_victory);

        let stats = service.statistics();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.total_victories, 1);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn six_misses_complete_without_victory() {
        let service = service_with_secret("world");
        let game_ref = service.start_game();

        for turn in 1..MAX_GUESSES {
            let outcome = service.submit_guess(&game_ref, "slate").unwrap();
            assert!(!outcome.is_completed, "turn {turn}");
        }

        let outcome = service.submit_guess(&game_ref, "slate").unwrap();
        assert!(outcome.is_completed);
        assert!(!outcome.is_victory);

        // Seventh submission bounces off the terminal game
        let err = service.submit_guess(&game_ref, "slate").unwrap_err();
        assert_eq!(err, ServiceError::Game(GameError::AlreadyCompleted));

        let stats = service.statistics();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.total_victories, 0);
        assert_eq!(stats.guess_distribution.get(&MAX_GUESSES), Some(&1));
    }

    #[test]
    fn outcome_reported_exactly_once_per_game() {
        let service = service_with_secret("world");
        let game_ref = service.start_game();

        service.submit_guess(&game_ref, "world").unwrap();
        for _ in 0..3 {
            let _ = service.submit_guess(&game_ref, "world");
        }

        assert_eq!(service.statistics().total_games, 1);
    }

    #[test]
    fn terminal_rejection_wins_over_dictionary_rejection() {
        let service = service_with_secret("world");
        let game_ref = service.start_game();
        service.submit_guess(&game_ref, "world").unwrap();

        // Original behavior: a finished game answers "completed" even to junk
        let err = service.submit_guess(&game_ref, "zzzzz").unwrap_err();
        assert_eq!(err, ServiceError::Game(GameError::AlreadyCompleted));
    }

    #[test]
    fn dictionary_rejects_unlisted_guess_without_mutation() {
        let service = service_with_secret("world");
        let game_ref = service.start_game();

        let err = service.submit_guess(&game_ref, "zzzzz").unwrap_err();
        assert_eq!(err, ServiceError::UnknownWord("zzzzz".to_string()));

        assert!(service.game(&game_ref).unwrap().guesses().is_empty());
    }

    #[test]
    fn create_game_validates_shape_before_dictionary() {
        let service = service_with_secret("world");

        let err = service.create_game("toolong").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidSecret(_)));

        let err = service.create_game("zzzzz").unwrap_err();
        assert_eq!(err, ServiceError::UnknownWord("zzzzz".to_string()));

        let game_ref = service.create_game("speed").unwrap();
        assert_eq!(service.game(&game_ref).unwrap().secret().text(), "SPEED");
    }

    #[test]
    fn unknown_reference_is_not_found() {
        let service = service_with_secret("world");

        let err = service.game(&GameRef::new("not-a-ref")).unwrap_err();
        assert_eq!(err, ServiceError::GameNotFound);

        let missing = MaskedCodec::default().encode(crate::game::GameId::new(999));
        let err = service.submit_guess(&missing, "world").unwrap_err();
        assert_eq!(err, ServiceError::GameNotFound);
    }

    #[test]
    fn game_snapshot_tracks_history() {
        let service = service_with_secret("world");
        let game_ref = service.start_game();

        service.submit_guess(&game_ref, "slate").unwrap();
        service.submit_guess(&game_ref, "crane").unwrap();

        let game = service.game(&game_ref).unwrap();
        assert_eq!(game.guesses().len(), 2);
        assert_eq!(game.results().len(), 2);
        assert_eq!(game.guesses()[0].text(), "SLATE");
        assert!(!game.is_completed());
    }

    #[test]
    fn statistics_accumulate_across_games() {
        let service = service_with_secret("world");

        // Two wins in one and two guesses, one six-miss loss
        let first = service.start_game();
        service.submit_guess(&first, "world").unwrap();

        let second = service.start_game();
        service.submit_guess(&second, "slate").unwrap();
        service.submit_guess(&second, "world").unwrap();

        let third = service.start_game();
        for _ in 0..MAX_GUESSES {
            service.submit_guess(&third, "slate").unwrap();
        }

        let stats = service.statistics();
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.total_victories, 2);
        assert!((stats.win_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
        assert_eq!(stats.guess_distribution.get(&2), Some(&1));
        assert_eq!(stats.guess_distribution.get(&MAX_GUESSES), Some(&1));

        let total: usize = stats.guess_distribution.values().sum();
        assert_eq!(total as u64, stats.total_games);
    }

    #[test]
    fn distinct_games_do_not_interfere() {
        let service = service_with_secret("world");
        let a = service.start_game();
        let b = service.start_game();

        service.submit_guess(&a, "world").unwrap();

        // Game B is still open and scoring normally
        let outcome = service.submit_guess(&b, "slate").unwrap();
        assert!(!outcome.is_completed);
    }
}
