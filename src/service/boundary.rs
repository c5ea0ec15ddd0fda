//! Capability seams the game service is built against
//!
//! Word legality, secret selection, game persistence, and opaque reference
//! encoding are all owned by collaborators outside the core. Each one is a
//! small trait here so the service stays testable without a dictionary
//! backend, a database, or a real token scheme.

use crate::core::Word;
use crate::game::{Game, GameId};
use std::fmt;

/// Opaque external form of a game identity
///
/// This is the only shape in which a game's identity leaves the system;
/// the core never interprets it except through a [`GameRefCodec`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameRef(String);

impl GameRef {
    /// Wrap an encoded reference string
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Get the encoded form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External word-legality check
///
/// Consulted before any game mutation; the state machine itself never
/// judges whether a guess is a real word.
pub trait Dictionary {
    /// Whether `text` is a playable word
    fn is_valid_word(&self, text: &str) -> bool;
}

/// Chooses the secret for a new game
///
/// Parameterizes what would otherwise be a hard-coded starting word.
pub trait SecretSelector {
    /// Pick the secret for one new game
    fn pick_secret(&self) -> Word;
}

/// Reversible encoding between internal identity and external reference
pub trait GameRefCodec {
    /// Encode an internal identity for external exposure
    fn encode(&self, id: GameId) -> GameRef;

    /// Decode an external reference back to the internal identity
    ///
    /// Returns `None` for references this codec did not produce.
    fn decode(&self, game_ref: &GameRef) -> Option<GameId>;
}

/// Game persistence seam
///
/// `with_game` hands out serialized in-place mutation: the implementation
/// must ensure at most one mutation per game runs at a time, which is what
/// keeps "one guess appended per accepted turn" intact under concurrent
/// submissions.
pub trait GameStore {
    /// Persist a new game with the given secret and return its identity
    fn create(&self, secret: Word) -> GameId;

    /// Read a point-in-time copy of a game
    fn snapshot(&self, id: GameId) -> Option<Game>;

    /// Run `f` against the stored game, exclusively
    ///
    /// Returns `None` if the game does not exist.
    fn with_game<T>(&self, id: GameId, f: impl FnOnce(&mut Game) -> T) -> Option<T>;
}
