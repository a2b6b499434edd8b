//! Purrdle
//!
//! A daily word-guessing puzzle. Every day has one target word picked
//! deterministically from the catalog; players get a fixed number of guesses
//! with correct/present/absent feedback, and definitions and letters of the
//! answer unlock progressively as time passes and guesses accumulate.
//!
//! # Quick Start
//!
//! ```rust
//! use purrdle::catalog::WordCatalog;
//! use purrdle::game::{GameSession, GameStatus};
//! use purrdle::hints::HintConfig;
//!
//! let catalog = WordCatalog::embedded().unwrap();
//! let entry = catalog.get(0).unwrap().clone();
//! let answer = entry.word.text().replace(' ', "");
//!
//! let mut session = GameSession::new(entry, 6, HintConfig::default());
//! for ch in answer.chars() {
//!     session.add_letter(ch);
//! }
//! let outcome = session.submit_guess().unwrap();
//! assert_eq!(outcome.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word catalog and dictionary ingestion
pub mod catalog;

// Daily, random and shared word selection
pub mod selection;

// Progressive hints
pub mod hints;

// Game sessions, routing and sharing
pub mod game;

// Back/forward navigation
pub mod history;

// Configuration file
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
