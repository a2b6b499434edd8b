//! Progressive hint unlocking
//!
//! Definition and letter hints unlock from three independent sources:
//! - elapsed play time (ascending thresholds per slot)
//! - number of submitted guesses (definitions only)
//! - explicit "reveal next" actions
//!
//! The sources are merged by taking the maximum, then clamped to the number of
//! slots. Every source only grows during a session, so unlocked counts never
//! go down. Once the game is over all definition slots count as unlocked.
//!
//! Unlocked counts are recomputed from the inputs on every query. The only
//! stored progress is the manual counters and the letter-slot cursor, which
//! guarantees each letter reveal is reported exactly once.
//!
//! Letter hints always leave at least one position that is neither found by
//! the player nor hinted, so hints alone never spell out the answer.

use crate::catalog::MAX_DEFINITIONS;
use serde::Deserialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Order in which letter positions are chosen for hints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterOrder {
    #[default]
    LeftToRight,
    RightToLeft,
    /// First, last, second, second to last, ...
    EdgesFirst,
}

impl LetterOrder {
    /// Board positions of a word with `len` letters in this order
    #[must_use]
    pub fn positions(self, len: usize) -> Vec<usize> {
        match self {
            Self::LeftToRight => (0..len).collect(),
            Self::RightToLeft => (0..len).rev().collect(),
            Self::EdgesFirst => {
                let mut order = Vec::with_capacity(len);
                let (mut lo, mut hi) = (0, len);
                while lo < hi {
                    order.push(lo);
                    lo += 1;
                    if lo < hi {
                        hi -= 1;
                        order.push(hi);
                    }
                }
                order
            }
        }
    }
}

/// Hint pacing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HintConfig {
    /// Seconds of play after which each definition slot unlocks
    pub definition_seconds: Vec<u64>,
    /// Guess counts after which each definition slot unlocks
    pub definition_guesses: Vec<usize>,
    /// Seconds of play before the first letter hint
    pub letter_start_seconds: u64,
    /// Seconds between further letter hints
    pub letter_interval_seconds: u64,
    /// Upper bound on letter hints; the word length minus one always applies
    pub max_letter_hints: Option<usize>,
    pub letter_order: LetterOrder,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            definition_seconds: vec![0, 30, 60],
            definition_guesses: vec![0, 2, 4],
            letter_start_seconds: 90,
            letter_interval_seconds: 30,
            max_letter_hints: None,
            letter_order: LetterOrder::LeftToRight,
        }
    }
}

/// Invalid hint pacing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintConfigError {
    #[error("{0} thresholds must be in ascending order")]
    NotAscending(&'static str),
    #[error("{field} lists {len} thresholds but there are only {max} definition slots", max = MAX_DEFINITIONS)]
    TooManySlots { field: &'static str, len: usize },
    #[error("letter_interval_seconds must be greater than zero")]
    ZeroInterval,
}

impl HintConfig {
    /// Check that thresholds are usable
    ///
    /// # Errors
    /// Returns `HintConfigError` for descending thresholds, more thresholds
    /// than definition slots, or a zero letter interval.
    pub fn validate(&self) -> Result<(), HintConfigError> {
        check_thresholds("definition_seconds", &self.definition_seconds)?;
        check_thresholds("definition_guesses", &self.definition_guesses)?;
        if self.letter_interval_seconds == 0 {
            return Err(HintConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Elapsed seconds at which letter slot `slot` unlocks
    #[must_use]
    pub fn letter_threshold(&self, slot: usize) -> u64 {
        self.letter_start_seconds + slot as u64 * self.letter_interval_seconds
    }
}

fn check_thresholds<T: PartialOrd>(field: &'static str, values: &[T]) -> Result<(), HintConfigError> {
    if values.len() > MAX_DEFINITIONS {
        return Err(HintConfigError::TooManySlots {
            field,
            len: values.len(),
        });
    }
    if values.windows(2).any(|w| w[0] > w[1]) {
        return Err(HintConfigError::NotAscending(field));
    }
    Ok(())
}

/// Session progress the timeline reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintInputs {
    pub elapsed_secs: u64,
    pub guess_count: usize,
    pub game_over: bool,
}

/// Notification that a letter slot unlocked and disclosed a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterReveal {
    pub slot: usize,
    pub position: usize,
}

/// What is currently disclosed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintDisclosure {
    pub definitions: usize,
    pub letter_positions: BTreeSet<usize>,
}

/// Unlock state for one session
#[derive(Debug, Clone)]
pub struct HintTimeline {
    config: HintConfig,
    order: Vec<usize>,
    manual_definitions: usize,
    manual_letters: usize,
    letter_cursor: usize,
    hinted: Vec<usize>,
}

impl HintTimeline {
    /// Timeline for a target with `letter_count` board positions
    #[must_use]
    pub fn new(config: HintConfig, letter_count: usize) -> Self {
        let order = config.letter_order.positions(letter_count);
        Self {
            config,
            order,
            manual_definitions: 0,
            manual_letters: 0,
            letter_cursor: 0,
            hinted: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Letter slots available for this target
    ///
    /// Never the whole word: at least one letter must be found by guessing.
    #[must_use]
    pub fn max_letter_hints(&self) -> usize {
        let cap = self.order.len().saturating_sub(1);
        self.config.max_letter_hints.map_or(cap, |m| m.min(cap))
    }

    /// Positions neither found by the player nor disclosed by a hint
    fn hidden_positions(&self, known: &[bool]) -> usize {
        self.order
            .iter()
            .filter(|&&p| !known.get(p).copied().unwrap_or(false) && !self.hinted.contains(&p))
            .count()
    }

    /// Letter slots that can still be honoured given what the player has found
    ///
    /// Found positions shrink the budget so one cell always stays hidden.
    #[must_use]
    pub fn letter_budget(&self, known: &[bool]) -> usize {
        let reachable = self.hinted.len() + self.hidden_positions(known).saturating_sub(1);
        self.max_letter_hints().min(reachable)
    }

    /// Definition slots unlocked by elapsed time alone
    #[must_use]
    pub fn definitions_by_time(&self, elapsed_secs: u64) -> usize {
        count_reached(&self.config.definition_seconds, &elapsed_secs)
    }

    /// Definition slots unlocked by guess count alone
    #[must_use]
    pub fn definitions_by_guesses(&self, guess_count: usize) -> usize {
        count_reached(&self.config.definition_guesses, &guess_count)
    }

    /// Letter slots unlocked by elapsed time alone (before clamping)
    #[must_use]
    pub fn letters_by_time(&self, elapsed_secs: u64) -> usize {
        if elapsed_secs < self.config.letter_start_seconds {
            return 0;
        }
        let interval = self.config.letter_interval_seconds.max(1);
        ((elapsed_secs - self.config.letter_start_seconds) / interval + 1) as usize
    }

    /// Unlocked definition count: the merged sources, or everything once over
    #[must_use]
    pub fn definition_count(&self, inputs: HintInputs) -> usize {
        if inputs.game_over {
            return MAX_DEFINITIONS;
        }
        self.definitions_by_time(inputs.elapsed_secs)
            .max(self.definitions_by_guesses(inputs.guess_count))
            .max(self.manual_definitions)
            .min(MAX_DEFINITIONS)
    }

    /// Unlocked letter-hint count
    #[must_use]
    pub fn letter_count(&self, inputs: HintInputs) -> usize {
        self.letters_by_time(inputs.elapsed_secs)
            .max(self.manual_letters)
            .min(self.max_letter_hints())
    }

    /// Unlock one more definition slot
    ///
    /// Returns false (and changes nothing) when the game is over or every
    /// slot is already unlocked.
    pub fn reveal_next_definition(&mut self, inputs: HintInputs) -> bool {
        let current = self.definition_count(inputs);
        if inputs.game_over || current >= MAX_DEFINITIONS {
            return false;
        }
        self.manual_definitions = current + 1;
        true
    }

    /// Unlock one more letter slot
    ///
    /// The reveal itself is reported by the next [`sync_letters`](Self::sync_letters).
    /// Refused without any change when the game is over or the reveal would
    /// leave no hidden position.
    pub fn reveal_next_letter(&mut self, inputs: HintInputs, known: &[bool]) -> bool {
        let current = self.letter_count(inputs);
        if inputs.game_over || current >= self.letter_budget(known) {
            return false;
        }
        self.manual_letters = current + 1;
        true
    }

    /// Assign positions to newly unlocked letter slots
    ///
    /// `known[p]` is true when the player has already found position `p` with
    /// a correct guess; such positions are skipped rather than consuming a
    /// slot. Each slot is processed once. The cursor stops at the letter
    /// budget, so a slot that would uncover the last hidden cell is never
    /// consumed.
    pub fn sync_letters(&mut self, inputs: HintInputs, known: &[bool]) -> Vec<LetterReveal> {
        let unlocked = self.letter_count(inputs).min(self.letter_budget(known));
        let mut reveals = Vec::new();

        while self.letter_cursor < unlocked {
            let slot = self.letter_cursor;
            let next = self.order.iter().copied().find(|&p| {
                !known.get(p).copied().unwrap_or(false) && !self.hinted.contains(&p)
            });
            let Some(position) = next else { break };
            self.hinted.push(position);
            reveals.push(LetterReveal { slot, position });
            self.letter_cursor += 1;
        }

        reveals
    }

    /// Positions disclosed by letter hints, in slot order
    #[must_use]
    pub fn hinted_positions(&self) -> &[usize] {
        &self.hinted
    }

    #[must_use]
    pub fn disclosure(&self, inputs: HintInputs) -> HintDisclosure {
        HintDisclosure {
            definitions: self.definition_count(inputs),
            letter_positions: self.hinted.iter().copied().collect(),
        }
    }

    /// Fraction of the wait until the next definition unlocks by time
    ///
    /// `None` when every time threshold has passed or the next slot is already
    /// unlocked another way.
    #[must_use]
    pub fn definition_progress(&self, inputs: HintInputs, elapsed: f64) -> Option<f64> {
        let unlocked = self.definition_count(inputs);
        let thresholds = &self.config.definition_seconds;
        let next = *thresholds.get(unlocked)?;
        let previous = unlocked
            .checked_sub(1)
            .and_then(|i| thresholds.get(i))
            .copied()
            .unwrap_or(0);
        Some(progress_between(previous, next, elapsed))
    }

    /// Fraction of the wait until the next letter hint unlocks by time
    ///
    /// `None` once no further letter can be hinted.
    #[must_use]
    pub fn letter_progress(&self, inputs: HintInputs, elapsed: f64, known: &[bool]) -> Option<f64> {
        let unlocked = self.letter_count(inputs);
        if inputs.game_over || unlocked >= self.letter_budget(known) {
            return None;
        }
        let next = self.config.letter_threshold(unlocked);
        let previous = match unlocked {
            0 => self
                .config
                .definition_seconds
                .last()
                .copied()
                .unwrap_or(0)
                .min(next),
            n => self.config.letter_threshold(n - 1),
        };
        Some(progress_between(previous, next, elapsed))
    }
}

/// Number of ascending thresholds already reached by `value`
fn count_reached<T: PartialOrd>(thresholds: &[T], value: &T) -> usize {
    thresholds.iter().take_while(|t| *t <= value).count()
}

fn progress_between(previous: u64, next: u64, elapsed: f64) -> f64 {
    if next <= previous {
        return 1.0;
    }
    ((elapsed - previous as f64) / (next - previous) as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(elapsed_secs: u64, guess_count: usize) -> HintInputs {
        HintInputs {
            elapsed_secs,
            guess_count,
            game_over: false,
        }
    }

    fn timeline(letters: usize) -> HintTimeline {
        HintTimeline::new(HintConfig::default(), letters)
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(HintConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_thresholds() {
        let config = HintConfig {
            definition_seconds: vec![0, 60, 30],
            ..HintConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(HintConfigError::NotAscending("definition_seconds"))
        );

        let config = HintConfig {
            definition_guesses: vec![0, 1, 2, 3],
            ..HintConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HintConfigError::TooManySlots { len: 4, .. })
        ));

        let config = HintConfig {
            letter_interval_seconds: 0,
            ..HintConfig::default()
        };
        assert_eq!(config.validate(), Err(HintConfigError::ZeroInterval));
    }

    #[test]
    fn definitions_unlock_by_time() {
        let t = timeline(5);
        assert_eq!(t.definition_count(at(0, 0)), 1);
        assert_eq!(t.definition_count(at(29, 0)), 1);
        assert_eq!(t.definition_count(at(30, 0)), 2);
        assert_eq!(t.definition_count(at(60, 0)), 3);
        assert_eq!(t.definition_count(at(10_000, 0)), 3);
    }

    #[test]
    fn definitions_unlock_by_guesses() {
        let t = timeline(5);
        assert_eq!(t.definition_count(at(0, 1)), 1);
        assert_eq!(t.definition_count(at(0, 2)), 2);
        assert_eq!(t.definition_count(at(0, 4)), 3);
    }

    #[test]
    fn sources_merge_by_maximum_not_sum() {
        let t = timeline(5);
        // Time alone gives 2, guesses alone give 2: merged stays 2
        assert_eq!(t.definition_count(at(30, 2)), 2);
    }

    #[test]
    fn game_over_discloses_every_definition() {
        let t = timeline(5);
        let over = HintInputs {
            game_over: true,
            ..at(0, 1)
        };
        assert_eq!(t.definition_count(over), MAX_DEFINITIONS);
    }

    #[test]
    fn manual_definition_reveal_advances_one_slot_and_caps() {
        let mut t = timeline(5);
        let now = at(5, 0);
        assert!(t.reveal_next_definition(now));
        assert_eq!(t.definition_count(now), 2);
        assert!(t.reveal_next_definition(now));
        assert_eq!(t.definition_count(now), 3);
        assert!(!t.reveal_next_definition(now));
        assert_eq!(t.definition_count(now), 3);
    }

    #[test]
    fn manual_reveal_builds_on_merged_count() {
        let mut t = timeline(5);
        // Time already unlocked two slots; manual reveal goes to three
        assert!(t.reveal_next_definition(at(30, 0)));
        assert_eq!(t.definition_count(at(30, 0)), 3);
    }

    #[test]
    fn manual_reveal_rejected_after_game_over() {
        let mut t = timeline(5);
        let over = HintInputs {
            game_over: true,
            ..HintInputs::default()
        };
        assert!(!t.reveal_next_definition(over));
        assert!(!t.reveal_next_letter(over, &[false; 5]));
    }

    #[test]
    fn letters_unlock_on_schedule_and_cap_below_word_length() {
        let t = timeline(5);
        assert_eq!(t.max_letter_hints(), 4);
        assert_eq!(t.letter_count(at(89, 0)), 0);
        assert_eq!(t.letter_count(at(90, 0)), 1);
        assert_eq!(t.letter_count(at(119, 0)), 1);
        assert_eq!(t.letter_count(at(120, 0)), 2);
        assert_eq!(t.letter_count(at(100_000, 0)), 4);
    }

    #[test]
    fn configured_letter_cap_applies() {
        let config = HintConfig {
            max_letter_hints: Some(2),
            ..HintConfig::default()
        };
        let t = HintTimeline::new(config, 8);
        assert_eq!(t.max_letter_hints(), 2);
        assert_eq!(t.letter_count(at(100_000, 0)), 2);
    }

    #[test]
    fn single_letter_word_has_no_letter_hints() {
        let mut t = timeline(1);
        assert_eq!(t.max_letter_hints(), 0);
        assert!(!t.reveal_next_letter(at(0, 0), &[false]));
        assert!(t.sync_letters(at(10_000, 0), &[false]).is_empty());
    }

    #[test]
    fn letter_reveals_fire_once_per_slot_in_order() {
        let mut t = timeline(5);
        let known = [false; 5];

        assert!(t.sync_letters(at(60, 0), &known).is_empty());
        assert_eq!(
            t.sync_letters(at(90, 0), &known),
            vec![LetterReveal { slot: 0, position: 0 }]
        );
        // Same moment again: nothing new
        assert!(t.sync_letters(at(90, 0), &known).is_empty());
        // Jump two thresholds at once: two reveals, increasing slot order
        assert_eq!(
            t.sync_letters(at(150, 0), &known),
            vec![
                LetterReveal { slot: 1, position: 1 },
                LetterReveal { slot: 2, position: 2 },
            ]
        );
        assert_eq!(t.hinted_positions(), &[0, 1, 2]);
    }

    #[test]
    fn known_positions_are_skipped_not_consumed() {
        let mut t = timeline(5);
        let known = [true, false, true, false, false];
        let reveals = t.sync_letters(at(120, 0), &known);
        assert_eq!(
            reveals,
            vec![
                LetterReveal { slot: 0, position: 1 },
                LetterReveal { slot: 1, position: 3 },
            ]
        );
    }

    #[test]
    fn last_hidden_position_is_never_hinted() {
        let mut t = timeline(3);
        let known = [true, true, false];
        assert_eq!(t.letter_budget(&known), 0);
        assert!(t.sync_letters(at(10_000, 0), &known).is_empty());
        assert!(!t.reveal_next_letter(at(10_000, 0), &known));
        assert!(t.hinted_positions().is_empty());
        assert_eq!(t.letter_progress(at(10_000, 0), 10_000.0, &known), None);
    }

    #[test]
    fn found_positions_shrink_the_letter_budget() {
        let mut t = timeline(5);
        let mut known = [false; 5];
        assert_eq!(
            t.sync_letters(at(90, 0), &known),
            vec![LetterReveal { slot: 0, position: 0 }]
        );

        // The player finds positions 1 to 3; only position 4 is left hidden
        known[1] = true;
        known[2] = true;
        known[3] = true;
        assert_eq!(t.letter_budget(&known), 1);
        assert!(!t.reveal_next_letter(at(100, 0), &known));
        assert!(t.sync_letters(at(10_000, 0), &known).is_empty());
        assert_eq!(t.hinted_positions(), &[0]);
    }

    #[test]
    fn refused_letter_reveal_keeps_the_count() {
        let mut t = timeline(5);
        let known = [true, true, true, true, false];
        let now = at(10, 0);
        assert!(!t.reveal_next_letter(now, &known));
        assert_eq!(t.letter_count(now), 0);
    }

    #[test]
    fn manual_letter_reveal_then_sync() {
        let mut t = timeline(5);
        let now = at(10, 0);
        assert!(t.reveal_next_letter(now, &[false; 5]));
        assert_eq!(t.letter_count(now), 1);
        let reveals = t.sync_letters(now, &[false; 5]);
        assert_eq!(reveals, vec![LetterReveal { slot: 0, position: 0 }]);
        // Time catching up to the manual count does not re-fire
        assert!(t.sync_letters(at(90, 0), &[false; 5]).is_empty());
        assert_eq!(
            t.sync_letters(at(120, 0), &[false; 5]),
            vec![LetterReveal { slot: 1, position: 1 }]
        );
    }

    #[test]
    fn disclosure_is_monotonic_over_a_simulated_session() {
        let mut t = timeline(6);
        let mut known = [false; 6];
        let mut previous = HintDisclosure::default();
        let mut notified = BTreeSet::new();

        for second in 0..400u64 {
            let guesses = (second / 50) as usize;
            if second == 100 {
                known[3] = true;
            }
            if second % 77 == 0 {
                t.reveal_next_definition(at(second, guesses));
            }
            if second % 131 == 0 {
                t.reveal_next_letter(at(second, guesses), &known);
            }
            for reveal in t.sync_letters(at(second, guesses), &known) {
                assert!(notified.insert(reveal.position), "position notified twice");
            }

            let current = t.disclosure(at(second, guesses));
            assert!(current.definitions >= previous.definitions);
            assert!(current.letter_positions.is_superset(&previous.letter_positions));
            previous = current;
        }

        assert_eq!(previous.definitions, MAX_DEFINITIONS);
        // Position 3 was found, so one fewer hint fits before the last cell
        assert_eq!(notified.len(), t.max_letter_hints() - 1);
        assert!(!notified.contains(&3));
    }

    #[test]
    fn letter_orders() {
        assert_eq!(LetterOrder::LeftToRight.positions(4), vec![0, 1, 2, 3]);
        assert_eq!(LetterOrder::RightToLeft.positions(4), vec![3, 2, 1, 0]);
        assert_eq!(LetterOrder::EdgesFirst.positions(5), vec![0, 4, 1, 3, 2]);
        assert_eq!(LetterOrder::EdgesFirst.positions(4), vec![0, 3, 1, 2]);
        assert!(LetterOrder::EdgesFirst.positions(0).is_empty());
    }

    #[test]
    fn right_to_left_order_drives_reveals() {
        let config = HintConfig {
            letter_order: LetterOrder::RightToLeft,
            ..HintConfig::default()
        };
        let mut t = HintTimeline::new(config, 4);
        assert_eq!(
            t.sync_letters(at(90, 0), &[false; 4]),
            vec![LetterReveal { slot: 0, position: 3 }]
        );
    }

    #[test]
    fn progress_values() {
        let t = timeline(5);
        let p = t.definition_progress(at(15, 0), 15.0).unwrap();
        assert!((p - 0.5).abs() < 1e-9);
        assert!(t.definition_progress(at(60, 0), 60.0).is_none());

        // First letter: measured from the last definition threshold (60 → 90)
        let p = t.letter_progress(at(75, 0), 75.0, &[false; 5]).unwrap();
        assert!((p - 0.5).abs() < 1e-9);
    }
}
