//! In-memory and demo implementations of the boundary capabilities
//!
//! These back the CLI and the tests. A real deployment would swap in a
//! database-backed store, a dictionary service client, and an actual
//! reversible-token scheme behind the same traits.

use super::boundary::{Dictionary, GameRef, GameRefCodec, GameStore, SecretSelector};
use crate::core::Word;
use crate::game::{Game, GameId};
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Mutex-guarded map of live games
///
/// The single lock serializes every mutation, which more than satisfies the
/// per-game exclusivity `GameStore::with_game` promises.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: Mutex<FxHashMap<GameId, Game>>,
    next_id: AtomicU64,
}

impl InMemoryGameStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no games
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<GameId, Game>> {
        self.games
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl GameStore for InMemoryGameStore {
    fn create(&self, secret: Word) -> GameId {
        let id = GameId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().insert(id, Game::new(id, secret));
        id
    }

    fn snapshot(&self, id: GameId) -> Option<Game> {
        self.lock().get(&id).cloned()
    }

    fn with_game<T>(&self, id: GameId, f: impl FnOnce(&mut Game) -> T) -> Option<T> {
        self.lock().get_mut(&id).map(f)
    }
}

/// Dictionary backed by an in-memory word list
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from a word list
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        let words = words.iter().map(|w| w.text().to_string()).collect();
        Self { words }
    }

    /// Number of words the dictionary accepts
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary accepts no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, text: &str) -> bool {
        // Malformed text can never match a stored canonical word
        Word::new(text).is_ok_and(|word| self.words.contains(word.text()))
    }
}

/// Always selects the same secret
///
/// Reproduces the fixed starting word the quick-start flow historically
/// used; mostly useful in tests and demos.
#[derive(Debug, Clone)]
pub struct FixedSecretSelector {
    secret: Word,
}

impl FixedSecretSelector {
    /// Select `secret` for every game
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }
}

impl SecretSelector for FixedSecretSelector {
    fn pick_secret(&self) -> Word {
        self.secret.clone()
    }
}

/// Selects a uniformly random secret from a word list
#[derive(Debug, Clone)]
pub struct RandomSecretSelector {
    words: Vec<Word>,
}

impl RandomSecretSelector {
    /// Build a selector over a non-empty word list
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words })
    }
}

impl SecretSelector for RandomSecretSelector {
    fn pick_secret(&self) -> Word {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .expect("word list is non-empty by construction")
    }
}

/// XOR-mask + hex stand-in for a real reversible token scheme
///
/// Keeps raw identities out of the external surface without pretending to
/// be cryptography.
#[derive(Debug, Clone, Copy)]
pub struct MaskedCodec {
    mask: u64,
}

impl MaskedCodec {
    /// Create a codec with the given mask
    #[must_use]
    pub const fn new(mask: u64) -> Self {
        Self { mask }
    }
}

impl Default for MaskedCodec {
    fn default() -> Self {
        Self::new(0xA5A5_5A5A_C3C3_3C3C)
    }
}

impl GameRefCodec for MaskedCodec {
    fn encode(&self, id: GameId) -> GameRef {
        GameRef::new(format!("{:016x}", id.raw() ^ self.mask))
    }

    fn decode(&self, game_ref: &GameRef) -> Option<GameId> {
        let encoded = game_ref.as_str();
        if encoded.len() != 16 || !encoded.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let raw = u64::from_str_radix(encoded, 16).ok()?;
        Some(GameId::new(raw ^ self.mask))
    }
}
