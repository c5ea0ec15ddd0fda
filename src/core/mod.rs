//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure and deterministic:
//! evaluating a guess has no side effects and no I/O.

mod verdict;
mod word;

pub use verdict::{GuessResult, LetterVerdict};
pub use word::{Word, WordError};
