//! Embedded dictionary
//!
//! The default word list is compiled into the binary so the game runs without
//! any data files.

/// Default dictionary in the delimited-text format read by [`super::csv`]
pub const EMBEDDED_WORDS_CSV: &str = include_str!("../../data/words.csv");
