//! Wordle Referee
//!
//! Server-authoritative core of a Wordle-style word-guessing game: a secret
//! five-letter word is chosen, a player submits sequential guesses, and each
//! guess is scored letter-by-letter against the secret. Completed games
//! report into a process-wide statistics aggregate.
//!
//! Transport, persistence, and the real dictionary live outside this crate
//! behind the capability traits in [`service`]; in-memory implementations
//! are included so everything runs end-to-end locally.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_referee::core::Word;
//! use wordle_referee::game::{Game, GameId};
//!
//! let secret = Word::new("world").unwrap();
//! let mut game = Game::new(GameId::new(1), secret);
//!
//! let outcome = game.submit_guess("world").unwrap();
//! assert!(outcome.is_victory);
//! assert!(outcome.is_completed);
//! ```

// Core domain types
pub mod core;

// Game lifecycle and statistics
pub mod game;

// Inbound service surface and boundary capabilities
pub mod service;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
