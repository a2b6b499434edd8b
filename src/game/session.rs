//! Game session state machine
//!
//! ```text
//! playing --correct guess--------------> won
//! playing --wrong guess, none left-----> lost
//! playing --wrong guess, some left-----> playing
//! ```
//!
//! `won` and `lost` absorb every further mutation. The session owns its
//! guesses, input buffer, clock and hint timeline; presentation reads it
//! through snapshot methods and never mutates it directly.

use super::clock::SessionClock;
use super::route::GameMode;
use super::share;
use crate::catalog::WordEntry;
use crate::core::{LetterState, Word, evaluate, is_perfect};
use crate::hints::{HintConfig, HintDisclosure, HintInputs, HintTimeline, LetterReveal, censor_definition};
use log::{debug, info};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Default number of attempts
pub const DEFAULT_MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// Guessed letters, uppercase, without spaces
    pub word: String,
    pub states: Vec<LetterState>,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub states: Vec<LetterState>,
    pub status: GameStatus,
}

/// Why a submission was refused; the session is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("guess has {actual} letters, the word has {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("the game is already over")]
    GameOver,
}

/// One board square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: LetterState,
}

impl Cell {
    const EMPTY: Self = Self {
        letter: None,
        state: LetterState::Empty,
    };

    const fn new(letter: u8, state: LetterState) -> Self {
        Self {
            letter: Some(letter as char),
            state,
        }
    }
}

/// A single play-through of one target word
#[derive(Debug, Clone)]
pub struct GameSession {
    entry: WordEntry,
    mode: GameMode,
    public_id: String,
    max_guesses: usize,
    guesses: Vec<GuessRecord>,
    buffer: Vec<u8>,
    status: GameStatus,
    clock: SessionClock,
    hints: HintTimeline,
}

impl GameSession {
    /// Start a session for `entry`
    ///
    /// `max_guesses` is raised to at least one.
    #[must_use]
    pub fn new(entry: WordEntry, max_guesses: usize, hints: HintConfig) -> Self {
        let hints = HintTimeline::new(hints, entry.word.len());
        Self {
            entry,
            mode: GameMode::Specific,
            public_id: String::new(),
            max_guesses: max_guesses.max(1),
            guesses: Vec::new(),
            buffer: Vec::new(),
            status: GameStatus::Playing,
            clock: SessionClock::new(),
            hints,
        }
    }

    /// Record how the target was chosen and its shareable identifier
    #[must_use]
    pub fn with_origin(mut self, mode: GameMode, public_id: impl Into<String>) -> Self {
        self.mode = mode;
        self.public_id = public_id.into();
        self
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.entry.word
    }

    #[inline]
    #[must_use]
    pub const fn entry(&self) -> &WordEntry {
        &self.entry
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn public_id(&self) -> &str {
        &self.public_id
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Letters typed into the active row
    #[must_use]
    pub fn buffer(&self) -> String {
        self.buffer.iter().map(|&b| b as char).collect()
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    #[must_use]
    pub const fn hints(&self) -> &HintTimeline {
        &self.hints
    }

    /// Inputs the hint timeline is evaluated against right now
    #[must_use]
    pub fn hint_inputs(&self) -> HintInputs {
        HintInputs {
            elapsed_secs: self.clock.elapsed_secs(),
            guess_count: self.guesses.len(),
            game_over: self.status.is_over(),
        }
    }

    /// Type a letter into the active row
    ///
    /// Returns false when the input is not a letter, the row is full or the
    /// game is over.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() || !ch.is_ascii_alphabetic() || self.buffer.len() >= self.target().len() {
            return false;
        }
        self.buffer.push(ch.to_ascii_uppercase() as u8);
        true
    }

    /// Remove the last typed letter
    pub fn delete_letter(&mut self) {
        if !self.status.is_over() {
            self.buffer.pop();
        }
    }

    /// Score the active row
    ///
    /// # Errors
    /// Returns `SubmitRejection::GameOver` after the game has ended and
    /// `SubmitRejection::WrongLength` when the row is not full. A rejected
    /// submission changes nothing.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, SubmitRejection> {
        if self.status.is_over() {
            return Err(SubmitRejection::GameOver);
        }
        let expected = self.target().len();
        if self.buffer.len() != expected {
            return Err(SubmitRejection::WrongLength {
                expected,
                actual: self.buffer.len(),
            });
        }

        let letters = std::mem::take(&mut self.buffer);
        let states = evaluate(&letters, self.entry.word.letters());
        let solved = is_perfect(&states);

        self.guesses.push(GuessRecord {
            word: letters.iter().map(|&b| b as char).collect(),
            states: states.clone(),
        });

        if solved {
            self.finish(GameStatus::Won);
        } else if self.guesses.len() >= self.max_guesses {
            self.finish(GameStatus::Lost);
        } else {
            debug!("guess {}/{} scored", self.guesses.len(), self.max_guesses);
        }

        Ok(SubmitOutcome {
            states,
            status: self.status,
        })
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.buffer.clear();
        self.clock.stop();
        info!(
            "{} game {} {:?} after {} guesses",
            self.mode,
            self.public_id,
            status,
            self.guesses.len()
        );
    }

    /// Advance play time and collect letter hints that became due
    pub fn tick(&mut self, delta: Duration) -> Vec<LetterReveal> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.clock.advance(delta);
        self.sync_letters()
    }

    /// Unlock the next definition ahead of schedule
    pub fn reveal_next_definition(&mut self) -> bool {
        let inputs = self.hint_inputs();
        self.hints.reveal_next_definition(inputs)
    }

    /// Unlock the next letter hint ahead of schedule
    ///
    /// Returns the disclosed position, or `None` when nothing more can be
    /// revealed without uncovering the last hidden cell.
    pub fn reveal_next_letter(&mut self) -> Option<LetterReveal> {
        let inputs = self.hint_inputs();
        let known = self.known_positions();
        if !self.hints.reveal_next_letter(inputs, &known) {
            return None;
        }
        self.sync_letters().into_iter().next()
    }

    fn sync_letters(&mut self) -> Vec<LetterReveal> {
        let known = self.known_positions();
        let reveals = self.hints.sync_letters(self.hint_inputs(), &known);
        for reveal in &reveals {
            debug!("letter hint {} disclosed position {}", reveal.slot, reveal.position);
        }
        reveals
    }

    /// Positions the player has already found with a correct guess
    #[must_use]
    pub fn known_positions(&self) -> Vec<bool> {
        let mut known = vec![false; self.target().len()];
        for guess in &self.guesses {
            for (slot, state) in known.iter_mut().zip(&guess.states) {
                *slot |= *state == LetterState::Correct;
            }
        }
        known
    }

    #[must_use]
    pub fn disclosure(&self) -> HintDisclosure {
        self.hints.disclosure(self.hint_inputs())
    }

    /// Board rows, one per attempt
    ///
    /// Submitted rows carry their feedback. While playing, the active row
    /// shows typed letters and fills the remaining squares with hinted
    /// letters (`Hinted`) and letters found in earlier guesses (`Revealed`).
    #[must_use]
    pub fn board(&self) -> Vec<Vec<Cell>> {
        let len = self.target().len();
        let mut rows: Vec<Vec<Cell>> = self
            .guesses
            .iter()
            .map(|g| {
                g.word
                    .bytes()
                    .zip(&g.states)
                    .map(|(b, &s)| Cell::new(b, s))
                    .collect()
            })
            .collect();

        if !self.status.is_over() {
            rows.push(self.active_row());
        }
        rows.resize(self.max_guesses.max(rows.len()), vec![Cell::EMPTY; len]);
        rows
    }

    fn active_row(&self) -> Vec<Cell> {
        let target = self.entry.word.letters();
        let known = self.known_positions();
        let hinted = self.hints.hinted_positions();

        (0..target.len())
            .map(|pos| {
                if let Some(&typed) = self.buffer.get(pos) {
                    Cell::new(typed, LetterState::Empty)
                } else if hinted.contains(&pos) {
                    Cell::new(target[pos], LetterState::Hinted)
                } else if known[pos] {
                    Cell::new(target[pos], LetterState::Revealed)
                } else {
                    Cell::EMPTY
                }
            })
            .collect()
    }

    /// The answer row, available once the game has ended
    #[must_use]
    pub fn solution(&self) -> Option<Vec<Cell>> {
        self.status.is_over().then(|| {
            self.entry
                .word
                .letters()
                .iter()
                .map(|&b| Cell::new(b, LetterState::Revealed))
                .collect()
        })
    }

    /// Best known state of every letter that has been guessed or hinted
    #[must_use]
    pub fn keyboard(&self) -> BTreeMap<char, LetterState> {
        let mut keys: BTreeMap<char, LetterState> = BTreeMap::new();
        let mut record = |letter: char, state: LetterState| {
            let slot = keys.entry(letter).or_insert(LetterState::Empty);
            if state.rank() > slot.rank() {
                *slot = state;
            }
        };

        for guess in &self.guesses {
            for (ch, &state) in guess.word.chars().zip(&guess.states) {
                record(ch, state);
            }
        }
        let target = self.entry.word.letters();
        for &pos in self.hints.hinted_positions() {
            record(target[pos] as char, LetterState::Hinted);
        }
        keys
    }

    /// Unlocked definitions, with the answer masked while playing
    #[must_use]
    pub fn visible_definitions(&self) -> Vec<String> {
        let unlocked = self.disclosure().definitions;
        (0..unlocked)
            .filter_map(|i| self.entry.definition(i))
            .map(|text| {
                if self.status.is_over() {
                    text.to_string()
                } else {
                    censor_definition(text, &self.entry.word)
                }
            })
            .collect()
    }

    /// Example sentence, shown once the game has ended
    #[must_use]
    pub fn visible_example(&self) -> Option<&str> {
        if self.status.is_over() {
            self.entry.example.as_deref()
        } else {
            None
        }
    }

    /// Shareable result text
    #[must_use]
    pub fn share_summary(&self) -> String {
        let label = (!self.public_id.is_empty()).then(|| format!("#{}", self.public_id));
        share::share_summary(label.as_deref(), &self.guesses, self.status, self.max_guesses)
    }
}
