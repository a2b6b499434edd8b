//! Core domain types for the puzzle
//!
//! This module contains the answer representation and the guess evaluation
//! engine. Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{LetterState, evaluate, is_perfect, to_symbols};
pub use word::{Word, WordError};
