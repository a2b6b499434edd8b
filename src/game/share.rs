//! Shareable result text

use super::session::{GameStatus, GuessRecord};
use crate::core::to_symbols;

/// Title line of every share block
pub const SHARE_TITLE: &str = "Purrdle";

/// Build the share block for a session
///
/// One line of symbols per guess (🟩 correct, 🟨 present, ⬛ absent), framed
/// by a title and a `Guessed in N/M` line. A lost game scores `X`, an
/// unfinished one `-`. The output contains no control characters other than
/// line feeds.
///
/// # Examples
/// ```
/// use purrdle::game::{GameStatus, share_summary};
///
/// assert_eq!(
///     share_summary(None, &[], GameStatus::Lost, 6),
///     "Purrdle\n\nGuessed in X/6"
/// );
/// ```
#[must_use]
pub fn share_summary(
    label: Option<&str>,
    guesses: &[GuessRecord],
    status: GameStatus,
    max_guesses: usize,
) -> String {
    let score = match status {
        GameStatus::Won => guesses.len().to_string(),
        GameStatus::Lost => "X".to_string(),
        GameStatus::Playing => "-".to_string(),
    };

    let mut lines = Vec::with_capacity(guesses.len() + 3);
    lines.push(match label {
        Some(label) => format!("{SHARE_TITLE} {}", sanitize(label)),
        None => SHARE_TITLE.to_string(),
    });
    lines.push(String::new());
    lines.extend(guesses.iter().map(|g| to_symbols(&g.states)));
    lines.push(format!("Guessed in {score}/{max_guesses}"));

    lines.join("\n")
}

fn sanitize(label: &str) -> String {
    label.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};

    fn record(word: &str, states: Vec<crate::core::LetterState>) -> GuessRecord {
        GuessRecord {
            word: word.to_string(),
            states,
        }
    }

    #[test]
    fn won_summary() {
        let guesses = vec![
            record("CRATE", vec![Correct, Correct, Correct, Absent, Correct]),
            record("CRANE", vec![Correct; 5]),
        ];
        let text = share_summary(Some("#abc1234"), &guesses, GameStatus::Won, 6);
        assert_eq!(
            text,
            "Purrdle #abc1234\n\n🟩🟩🟩⬛🟩\n🟩🟩🟩🟩🟩\nGuessed in 2/6"
        );
    }

    #[test]
    fn lost_and_unfinished_scores() {
        let guesses = vec![record("LEMON", vec![Present, Present, Absent, Absent, Absent])];
        assert!(share_summary(None, &guesses, GameStatus::Lost, 1).ends_with("Guessed in X/1"));
        assert!(share_summary(None, &guesses, GameStatus::Playing, 6).ends_with("Guessed in -/6"));
    }

    #[test]
    fn summary_is_deterministic_and_free_of_control_characters() {
        let guesses = vec![record("LEMON", vec![Present, Present, Absent, Absent, Absent])];
        let a = share_summary(Some("daily\t2026\r"), &guesses, GameStatus::Lost, 6);
        let b = share_summary(Some("daily\t2026\r"), &guesses, GameStatus::Lost, 6);
        assert_eq!(a, b);
        assert!(a.chars().all(|c| c == '\n' || !c.is_control()));
    }
}
