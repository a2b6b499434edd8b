//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::Cell;
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Keyboard rows in display order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Render one board square as a colored tile
#[must_use]
pub fn colored_cell(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter.unwrap_or('·'));
    style_state(&text, cell.state)
}

fn style_state(text: &str, state: LetterState) -> ColoredString {
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Hinted => text.cyan().bold(),
        LetterState::Revealed => text.green().dimmed(),
        LetterState::Empty => text.normal(),
    }
}

/// Render a board row, leaving a wider gap where the answer has a space
#[must_use]
pub fn format_row(cells: &[Cell], gaps: &[usize]) -> String {
    let mut row = String::new();
    for (pos, cell) in cells.iter().enumerate() {
        row.push_str(&colored_cell(*cell).to_string());
        if gaps.contains(&pos) {
            row.push_str("   ");
        } else if pos + 1 < cells.len() {
            row.push(' ');
        }
    }
    row
}

/// Render the keyboard with the best known state of each letter
#[must_use]
pub fn keyboard_lines(keys: &BTreeMap<char, LetterState>) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|ch| {
                    let state = keys.get(&ch).copied().unwrap_or(LetterState::Empty);
                    style_state(&ch.to_string(), state).to_string()
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format elapsed play time as `m:ss`
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
